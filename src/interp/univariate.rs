//! Univariate interpolation over all nonzero field points.
//!
//! Given one sample per nonzero element of GF(q) — sample `i` being the
//! function's value at `g^i`, where `g` is the field's primitive element —
//! [`VandermondeSolver`] reconstructs the degree-(q-2) polynomial's
//! coefficients without ever materializing the full (q-1)×(q-1) Vandermonde
//! matrix.
//!
//! The trick: take the second row of the 2×n Vandermonde matrix with base
//! `g`, `[g^0, g^1, ..., g^(n-1)]`, and reverse every entry from index 1 on.
//! Since `g^n = 1`, the resulting vector `v` satisfies `v[k] = g^(-k)`, and
//! coefficient `i` of the interpolated polynomial is the dot product
//! `(v^i) · y`. Each coefficient needs only the single row, so memory stays
//! O(n) and the coefficient indices can be computed independently — which is
//! what makes the round-robin partitioning below possible.
//!
//! The identity yields the coefficients exactly when q - 1 ≡ 1 (mod p),
//! i.e. in characteristic 2 (q = 2^k); in odd characteristic the result is
//! the negated coefficient vector.

use crate::error::{Error, Result};
use crate::gf::{Gf, GfElement, GfVector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A round-robin partition of the coefficient index range.
///
/// `Partition { index, count }` owns every coefficient index `i` with
/// `i % count == index`. Round-robin assignment (rather than contiguous
/// blocks) balances work when the index range is not a multiple of the
/// worker count.
///
/// The descriptor is always an explicit value passed into the solver, never
/// read from ambient process state, so partitioned interpolation is testable
/// without any multi-process harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Partition {
    index: usize,
    count: usize,
}

impl Partition {
    /// Create a partition descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPartition`] unless `index < count`.
    pub fn new(index: usize, count: usize) -> Result<Self> {
        if count == 0 || index >= count {
            return Err(Error::InvalidPartition { index, count });
        }
        Ok(Self { index, count })
    }

    /// The partition covering the whole index range.
    #[must_use]
    pub fn solo() -> Self {
        Self { index: 0, count: 1 }
    }

    /// Get the worker index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the worker count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check whether this partition owns a coefficient index.
    #[must_use]
    pub fn owns(&self, i: usize) -> bool {
        i % self.count == self.index
    }
}

/// A univariate polynomial over a Galois field.
///
/// Coefficients are stored ascending by degree: `coeffs[i]` is the
/// coefficient of `X^i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: GfVector,
}

impl Polynomial {
    /// Wrap a coefficient vector as a polynomial.
    #[must_use]
    pub fn new(coeffs: GfVector) -> Self {
        Self { coeffs }
    }

    /// Get the coefficient vector (index = degree, ascending).
    #[must_use]
    pub fn coefficients(&self) -> &GfVector {
        &self.coeffs
    }

    /// Get the field this polynomial is defined over.
    #[must_use]
    pub fn field(&self) -> &Gf {
        self.coeffs.field()
    }

    /// Get the degree: the highest index with a nonzero coefficient, or 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs
            .values()
            .iter()
            .rposition(|&c| c != 0)
            .unwrap_or(0)
    }

    /// Evaluate the polynomial at a field point using Horner's method.
    #[must_use]
    pub fn evaluate(&self, x: &GfElement) -> GfElement {
        let tables = self.field().tables();
        let mut acc = 0u32;
        for &c in self.coeffs.values().iter().rev() {
            acc = tables.add(tables.mul(acc, x.value()), c);
        }
        self.field().element(acc)
    }

    /// Evaluate the polynomial at exponent `i`, i.e. at the field point
    /// `g^i` where `g` is the primitive element.
    ///
    /// This is the evaluation convention the solver's samples are indexed
    /// by: sample `i` is the function's value at `g^i`, not at the raw
    /// integer `i`.
    #[must_use]
    pub fn evaluate_at_exponent(&self, i: u32) -> GfElement {
        let g = self.field().primitive_element();
        self.evaluate(&g.pow(i))
    }
}

/// Reconstructs polynomial coefficients from samples at all nonzero field
/// points, optionally restricted to one round-robin partition.
///
/// # Example
///
/// ```
/// use polydfa::gf::{Gf, GfVector};
/// use polydfa::interp::VandermondeSolver;
///
/// let gf8 = Gf::new(8).unwrap();
/// let solver = VandermondeSolver::new(gf8.clone());
///
/// // Samples of f at g^0, g^1, ..., g^6
/// let y = GfVector::from_values(&gf8, vec![3, 1, 4, 1, 5, 2, 6]).unwrap();
/// let poly = solver.interpolate(&y).unwrap();
///
/// for i in 0..7 {
///     assert_eq!(poly.evaluate_at_exponent(i).value(), y.value(i as usize));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VandermondeSolver {
    field: Gf,
}

impl VandermondeSolver {
    /// Create a solver for the given field.
    #[must_use]
    pub fn new(field: Gf) -> Self {
        Self { field }
    }

    /// Get the field this solver interpolates over.
    #[must_use]
    pub fn field(&self) -> &Gf {
        &self.field
    }

    /// The required sample count: one per nonzero field element.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        (self.field.order() - 1) as usize
    }

    /// Reconstruct all coefficients from the full sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the sample vector's length is not
    /// `order - 1`, or [`Error::FieldMismatch`] if it belongs to another
    /// field.
    pub fn interpolate(&self, y: &GfVector) -> Result<Polynomial> {
        self.interpolate_partition(y, Partition::solo())
    }

    /// Reconstruct only the coefficients owned by one partition.
    ///
    /// Every coefficient index not owned by `partition` is left as the
    /// field's zero element, so summing the outputs of all partitions of a
    /// common count element-wise (see [`reduce`]) yields the complete
    /// coefficient vector.
    ///
    /// # Errors
    ///
    /// Same as [`VandermondeSolver::interpolate`].
    pub fn interpolate_partition(&self, y: &GfVector, partition: Partition) -> Result<Polynomial> {
        let n = self.sample_count();
        if y.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                actual: y.len(),
            });
        }
        if !self.field.same_field(y.field()) {
            return Err(Error::FieldMismatch {
                left: self.field.order(),
                right: y.field().order(),
            });
        }

        let g = self.field.primitive_element();

        // Second row of the 2×n Vandermonde matrix with base g, with every
        // entry from index 1 on reversed; this single row stands in for the
        // whole inverse matrix
        #[allow(clippy::cast_possible_truncation)]
        let mut row: Vec<u32> = (0..n).map(|k| g.pow(k as u32).value()).collect();
        row[1..].reverse();
        let v = GfVector::from_values(&self.field, row)?;

        let mut coeffs = GfVector::zeros(&self.field, n);
        for i in (partition.index()..n).step_by(partition.count()) {
            #[allow(clippy::cast_possible_truncation)]
            let c = v.pow_scalar(i as u32).dot(y)?;
            coeffs.set(i, &c);
        }

        Ok(Polynomial::new(coeffs))
    }
}

/// Sum partial coefficient vectors element-wise over the field.
///
/// When the partials come from disjoint round-robin partitions of a common
/// count over the same sample vector, each coefficient index was computed by
/// exactly one partition and is zero in all others, so the sum is the
/// complete coefficient vector. Field addition is commutative and
/// associative, so the order of the partials is irrelevant.
///
/// # Errors
///
/// Returns [`Error::SizeMismatch`] if `partials` is empty or the vectors
/// disagree in length, and [`Error::FieldMismatch`] if they disagree in
/// field.
pub fn reduce(partials: &[Polynomial]) -> Result<Polynomial> {
    let Some((first, rest)) = partials.split_first() else {
        return Err(Error::SizeMismatch {
            expected: 1,
            actual: 0,
        });
    };

    let mut acc = first.coefficients().clone();
    for partial in rest {
        acc = acc.add(partial.coefficients())?;
    }
    Ok(Polynomial::new(acc))
}
