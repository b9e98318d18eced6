//! # polydfa
//!
//! Polynomial interpolation over Galois fields, with a state machine that
//! runs on the result: a DFA whose transition function is a fitted bilinear
//! polynomial instead of a lookup table.
//!
//! ## Overview
//!
//! The library is built in layers:
//!
//! - **Field arithmetic** ([`gf`]): runtime-configured fields GF(q) for any
//!   prime power q, with precomputed operation tables, a canonical
//!   primitive element, fixed-length field vectors, and Gaussian
//!   elimination over the field.
//! - **Univariate interpolation** ([`interp::VandermondeSolver`]):
//!   reconstructs a degree-(q-2) polynomial from its values at all nonzero
//!   field points, one coefficient at a time via a single flipped
//!   Vandermonde row — never materializing the full matrix. Coefficient
//!   indices split across round-robin [`interp::Partition`]s for
//!   independent workers, recombined by summation.
//! - **Bilinear interpolation** ([`interp::BilinearPoly`]): fits a
//!   two-variable polynomial through a complete rectangular grid of
//!   (x, y, z) samples over the tensor-product exponent basis.
//! - **Polynomial automaton** ([`dfa::PolyAutomaton`]): a DFA that computes
//!   its next state by evaluating the fitted bilinear polynomial at
//!   (token, current state).
//!
//! ## Quick Start
//!
//! ```rust
//! use polydfa::gf::{Gf, GfVector};
//! use polydfa::interp::VandermondeSolver;
//!
//! let gf8 = Gf::new(8).unwrap();
//!
//! // One sample per nonzero field point: sample i is the value at g^i
//! let y = GfVector::from_values(&gf8, vec![3, 1, 4, 1, 5, 2, 6]).unwrap();
//!
//! let solver = VandermondeSolver::new(gf8);
//! let poly = solver.interpolate(&y).unwrap();
//!
//! // The reconstruction is exact at every sampled point
//! for i in 0..7 {
//!     assert_eq!(poly.evaluate_at_exponent(i).value(), y.value(i as usize));
//! }
//! ```
//!
//! ## Evaluation convention
//!
//! A polynomial's sample index `i` always refers to the field point `g^i`,
//! where `g` is the field's primitive element — not to the raw integer `i`.
//! The coefficient reconstruction is built on this indexing, so
//! [`interp::Polynomial::evaluate_at_exponent`] is the matching way to read
//! values back out.
//!
//! ## Features
//!
//! - `parallel`: Rayon-based partitioned interpolation ([`parallel`])
//! - `serde`: Serialization of plain data types (partitions, samples)
//! - `python`: Python bindings via PyO3

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dfa;
pub mod error;
pub mod gf;
pub mod interp;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "python")]
pub mod python;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dfa::{AcceptPolicy, PolyAutomaton, TransitionSample};
    pub use crate::error::{Error, Result};
    pub use crate::gf::{Gf, GfElement, GfTables, GfVector};
    pub use crate::interp::{reduce, BilinearPoly, Partition, Polynomial, VandermondeSolver};
    pub use crate::utils::{factor_prime_power, is_prime, is_prime_power};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::par_interpolate;
}

// Re-export commonly used items at crate root
pub use dfa::{AcceptPolicy, PolyAutomaton, TransitionSample};
pub use error::{Error, Result};
pub use gf::{Gf, GfElement, GfVector};
pub use interp::{reduce, BilinearPoly, Partition, Polynomial, VandermondeSolver};

#[cfg(feature = "parallel")]
pub use parallel::par_interpolate;
