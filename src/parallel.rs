//! Parallel partitioned interpolation using Rayon.
//!
//! This module fans the round-robin coefficient partitions of a univariate
//! interpolation across rayon tasks and recombines them by element-wise
//! summation. Enable with the `parallel` feature flag.
//!
//! Each task runs [`VandermondeSolver::interpolate_partition`] on its own
//! partition and shares nothing with the others; the reduction is a single
//! element-wise sum at the end, mirroring how the same computation deploys
//! across non-communicating worker processes. The result is bit-identical
//! to the sequential [`VandermondeSolver::interpolate`].
//!
//! # Usage
//!
//! ```ignore
//! use polydfa::gf::{Gf, GfVector};
//! use polydfa::parallel::par_interpolate;
//!
//! let gf8 = Gf::new(8).unwrap();
//! let y = GfVector::from_values(&gf8, vec![6, 0, 3, 7, 1, 4, 2]).unwrap();
//! let poly = par_interpolate(&gf8, &y, 4).unwrap();
//! ```

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::gf::{Gf, GfVector};
use crate::interp::{reduce, Partition, Polynomial, VandermondeSolver};

/// Interpolate by splitting the coefficient indices across `workers`
/// round-robin partitions, one rayon task each, then summing the partial
/// results.
///
/// # Errors
///
/// Returns [`Error::InvalidPartition`] if `workers` is 0, otherwise the
/// same errors as [`VandermondeSolver::interpolate`].
pub fn par_interpolate(field: &Gf, samples: &GfVector, workers: usize) -> Result<Polynomial> {
    if workers == 0 {
        return Err(Error::InvalidPartition {
            index: 0,
            count: 0,
        });
    }

    let solver = VandermondeSolver::new(field.clone());

    let partials: Vec<Polynomial> = (0..workers)
        .into_par_iter()
        .map(|index| {
            let partition = Partition::new(index, workers)?;
            solver.interpolate_partition(samples, partition)
        })
        .collect::<Result<_>>()?;

    reduce(&partials)
}
