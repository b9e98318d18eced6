//! Polynomial interpolation over Galois fields.
//!
//! Two interpolators share the field layer:
//!
//! - [`VandermondeSolver`]: univariate reconstruction from samples at all
//!   nonzero field points, partitionable across independent workers via
//!   round-robin [`Partition`]s and recombined with [`reduce`].
//! - [`BilinearPoly`]: two-variable interpolation over a complete
//!   rectangular grid, solved through the field's Gaussian elimination.
//!
//! ## Example
//!
//! ```
//! use polydfa::gf::{Gf, GfVector};
//! use polydfa::interp::{reduce, Partition, VandermondeSolver};
//!
//! let gf8 = Gf::new(8).unwrap();
//! let y = GfVector::from_values(&gf8, vec![6, 0, 3, 7, 1, 4, 2]).unwrap();
//! let solver = VandermondeSolver::new(gf8);
//!
//! // Two workers each compute their own coefficient subset...
//! let partials: Vec<_> = (0..2)
//!     .map(|i| {
//!         let partition = Partition::new(i, 2).unwrap();
//!         solver.interpolate_partition(&y, partition).unwrap()
//!     })
//!     .collect();
//!
//! // ...and summation recombines them into the full polynomial
//! let poly = reduce(&partials).unwrap();
//! assert_eq!(poly.evaluate_at_exponent(0).value(), 6);
//! ```

mod bilinear;
mod univariate;

pub use bilinear::BilinearPoly;
pub use univariate::{reduce, Partition, Polynomial, VandermondeSolver};
