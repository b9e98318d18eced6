//! Bilinear (multilinear) interpolation over a rectangular grid.
//!
//! Given a complete grid of (x, y, z) samples over a Galois field,
//! [`BilinearPoly`] builds the tensor-product exponent basis, assembles the
//! design matrix, solves for the coefficients with the field's Gaussian
//! elimination, and evaluates the resulting two-variable polynomial.
//!
//! The exponent basis is fixed and deterministic: all pairs
//! `(x_exp, y_exp)` with `x_exp` in `[0, |X|)` and `y_exp` in `[0, |Y|)`,
//! enumerated row-major (outer loop over `x_exp`). This order fixes the
//! design-matrix columns, the coefficient indices, and the serialized
//! rendering, so two interpolators built from the same sample set — in any
//! row order — agree exactly.

use std::collections::BTreeSet;
use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::gf::{linalg, Gf, GfElement, GfVector};

/// A two-variable polynomial over the tensor-product exponent basis.
///
/// The basis term at index `j` is `x^(basis[j].0) * y^(basis[j].1)`; the
/// coefficient vector is indexed identically.
///
/// # Example
///
/// ```
/// use polydfa::gf::{Gf, GfVector};
/// use polydfa::interp::BilinearPoly;
///
/// let gf5 = Gf::new(5).unwrap();
/// // f(x, y) = 1 + 2x on the grid {0,1} × {0,1}
/// let x = GfVector::from_values(&gf5, vec![0, 0, 1, 1]).unwrap();
/// let y = GfVector::from_values(&gf5, vec![0, 1, 0, 1]).unwrap();
/// let z = GfVector::from_values(&gf5, vec![1, 1, 3, 3]).unwrap();
///
/// let poly = BilinearPoly::fit(&gf5, &x, &y, &z).unwrap();
/// assert_eq!(poly.evaluate_values(1, 1).unwrap().value(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearPoly {
    field: Gf,
    basis: Vec<(u32, u32)>,
    coeffs: GfVector,
}

impl BilinearPoly {
    /// Interpolate a polynomial through a complete rectangular grid of
    /// samples.
    ///
    /// # Errors
    ///
    /// - [`Error::SizeMismatch`] if the three vectors differ in length.
    /// - [`Error::FieldMismatch`] if any vector belongs to another field.
    /// - [`Error::IncompleteGrid`] if the (x, y) coordinates are not the
    ///   full rectangular product of the distinct x and y values.
    /// - [`Error::SingularMatrix`] if the design matrix has no unique
    ///   solution (possible with duplicate coordinate pairs whose count
    ///   happens to match the grid size); this is a legitimate runtime
    ///   failure, surfaced as-is.
    pub fn fit(field: &Gf, x: &GfVector, y: &GfVector, z: &GfVector) -> Result<Self> {
        for v in [x, y, z] {
            if !field.same_field(v.field()) {
                return Err(Error::FieldMismatch {
                    left: field.order(),
                    right: v.field().order(),
                });
            }
            if v.len() != x.len() {
                return Err(Error::SizeMismatch {
                    expected: x.len(),
                    actual: v.len(),
                });
            }
        }

        let distinct_x: BTreeSet<u32> = x.values().iter().copied().collect();
        let distinct_y: BTreeSet<u32> = y.values().iter().copied().collect();

        if distinct_x.len() * distinct_y.len() != x.len() {
            return Err(Error::IncompleteGrid {
                distinct_x: distinct_x.len(),
                distinct_y: distinct_y.len(),
                samples: x.len(),
            });
        }

        let basis = exponent_basis(distinct_x.len(), distinct_y.len());

        // One design-matrix row per sample: A[i][j] = x_i^pj * y_i^qj
        let n = x.len();
        let tables = field.tables();
        let mut a = Array2::zeros((n, n));
        for i in 0..n {
            for (j, &(x_exp, y_exp)) in basis.iter().enumerate() {
                let x_pow = tables.pow(x.value(i), x_exp);
                let y_pow = tables.pow(y.value(i), y_exp);
                a[[i, j]] = tables.mul(x_pow, y_pow);
            }
        }

        let coeffs = linalg::solve(field, &a, z)?;

        Ok(Self {
            field: field.clone(),
            basis,
            coeffs,
        })
    }

    /// Get the field this polynomial is defined over.
    #[must_use]
    pub fn field(&self) -> &Gf {
        &self.field
    }

    /// Get the exponent basis, in coefficient order.
    #[must_use]
    pub fn basis(&self) -> &[(u32, u32)] {
        &self.basis
    }

    /// Get the coefficient vector, in basis order.
    #[must_use]
    pub fn coefficients(&self) -> &GfVector {
        &self.coeffs
    }

    /// Evaluate the polynomial at a field point.
    ///
    /// Pure: no interpolator state is mutated, and the same inputs always
    /// produce the same output.
    ///
    /// # Panics
    ///
    /// Panics if either element belongs to a different field.
    #[must_use]
    pub fn evaluate(&self, x: &GfElement, y: &GfElement) -> GfElement {
        assert!(
            self.field.same_field(x.field()) && self.field.same_field(y.field()),
            "evaluation point must belong to {}",
            self.field
        );

        let tables = self.field.tables();
        let mut total = 0u32;
        for (j, &(x_exp, y_exp)) in self.basis.iter().enumerate() {
            let term = tables.mul(
                self.coeffs.value(j),
                tables.mul(tables.pow(x.value(), x_exp), tables.pow(y.value(), y_exp)),
            );
            total = tables.add(total, term);
        }
        self.field.element(total)
    }

    /// Evaluate at integer values, range-checking both against the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if either value is not a field
    /// element.
    pub fn evaluate_values(&self, x: u32, y: u32) -> Result<GfElement> {
        let x = self.field.try_element(x)?;
        let y = self.field.try_element(y)?;
        Ok(self.evaluate(&x, &y))
    }
}

/// All (x_exp, y_exp) pairs in row-major order: outer loop over the x
/// exponent, inner loop over the y exponent.
#[allow(clippy::cast_possible_truncation)]
fn exponent_basis(x_count: usize, y_count: usize) -> Vec<(u32, u32)> {
    (0..x_count as u32)
        .flat_map(|x_exp| (0..y_count as u32).map(move |y_exp| (x_exp, y_exp)))
        .collect()
}

impl fmt::Display for BilinearPoly {
    /// Render the polynomial as `f(x, y) = c0 + c1*x^a + c2*y^b + ...` in
    /// basis order, omitting zero exponents from each term.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x, y) = ")?;
        for (j, &(x_exp, y_exp)) in self.basis.iter().enumerate() {
            if j != 0 {
                write!(f, " + ")?;
            }

            write!(f, "{}", self.coeffs.value(j))?;
            if x_exp != 0 {
                write!(f, "*x^{x_exp}")?;
            }
            if y_exp != 0 {
                write!(f, "*y^{y_exp}")?;
            }
        }
        Ok(())
    }
}
