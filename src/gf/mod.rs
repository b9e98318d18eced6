//! Galois field (finite field) arithmetic.
//!
//! This module provides the algebraic foundation for the interpolation
//! engine: fields GF(q) where q is a prime power, elements tagged with
//! their owning field, fixed-length field vectors, and a linear solver
//! working entirely in field arithmetic.
//!
//! ## Overview
//!
//! - [`Gf`]: Runtime-configured field with precomputed tables and a
//!   canonical primitive element
//! - [`GfElement`]: Element in a field, fail-fast on cross-field mixing
//! - [`GfVector`]: Fixed-length, field-tagged element sequence
//! - [`GfTables`]: The underlying precomputed operation tables
//! - [`linalg::solve`]: Gaussian elimination over the field
//!
//! ## Example
//!
//! ```
//! use polydfa::gf::Gf;
//!
//! // Create GF(8) = GF(2^3)
//! let gf8 = Gf::new(8).unwrap();
//!
//! let a = gf8.element(3);
//! let b = gf8.element(5);
//!
//! // In characteristic 2, addition is XOR
//! assert_eq!(a.add(&b).value(), 6);
//!
//! // The primitive element generates every nonzero element
//! let g = gf8.primitive_element();
//! assert_eq!(g.pow(7).value(), 1);
//! ```

mod element;
pub mod linalg;
mod poly;
mod tables;
mod vector;

pub use element::{Gf, GfElement};
pub use poly::{get_irreducible_poly, has_irreducible_poly, IRREDUCIBLE_POLYS};
pub use tables::GfTables;
pub use vector::GfVector;
