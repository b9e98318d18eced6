//! Gaussian elimination over a Galois field.
//!
//! A dedicated finite-field solver rather than a floating-point one: every
//! intermediate value stays a field element, pivot selection only ever picks
//! nonzero field elements, and singularity is detected exactly (no nonzero
//! pivot left in a column) instead of via an epsilon test.

use ndarray::Array2;

use super::{Gf, GfVector};
use crate::error::{Error, Result};

/// Solve the linear system `a · x = b` over a Galois field.
///
/// Forward elimination with row normalization followed by back substitution.
/// The matrix holds integer representations of elements of `field`; it is
/// copied internally, so the caller's matrix is left untouched.
///
/// # Errors
///
/// - [`Error::SizeMismatch`] if `a` is not square or `b`'s length does not
///   match its dimension.
/// - [`Error::FieldMismatch`] if `b` belongs to a different field.
/// - [`Error::SingularMatrix`] if some column has no nonzero pivot; the
///   system has no unique solution and retrying cannot change that.
pub fn solve(field: &Gf, a: &Array2<u32>, b: &GfVector) -> Result<GfVector> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(Error::SizeMismatch {
            expected: n,
            actual: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(Error::SizeMismatch {
            expected: n,
            actual: b.len(),
        });
    }
    if !field.same_field(b.field()) {
        return Err(Error::FieldMismatch {
            left: field.order(),
            right: b.field().order(),
        });
    }

    let tables = field.tables();
    let mut m = a.clone();
    let mut rhs = b.values().to_vec();

    // Forward elimination
    for col in 0..n {
        // Find a row with a nonzero entry in this column; field elements
        // are exact, so any nonzero entry is a valid pivot
        let pivot = (col..n).find(|&row| m[[row, col]] != 0);
        let Some(pivot) = pivot else {
            return Err(Error::SingularMatrix { column: col });
        };

        if pivot != col {
            for j in col..n {
                m.swap([pivot, j], [col, j]);
            }
            rhs.swap(pivot, col);
        }

        // Normalize the pivot row so the diagonal is 1
        let inv = tables.inv(m[[col, col]]);
        for j in col..n {
            m[[col, j]] = tables.mul(m[[col, j]], inv);
        }
        rhs[col] = tables.mul(rhs[col], inv);

        // Eliminate below
        for row in (col + 1)..n {
            let factor = m[[row, col]];
            if factor == 0 {
                continue;
            }
            for j in col..n {
                let sub = tables.mul(factor, m[[col, j]]);
                m[[row, j]] = tables.sub(m[[row, j]], sub);
            }
            rhs[row] = tables.sub(rhs[row], tables.mul(factor, rhs[col]));
        }
    }

    // Back substitution; the diagonal is 1 after normalization
    let mut x = vec![0u32; n];
    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum = tables.sub(sum, tables.mul(m[[i, j]], x[j]));
        }
        x[i] = sum;
    }

    GfVector::from_values(field, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_identity() {
        let gf7 = Gf::new(7).unwrap();
        let a = array![[1, 0, 0], [0, 1, 0], [0, 0, 1]];
        let b = GfVector::from_values(&gf7, vec![3, 5, 6]).unwrap();

        let x = solve(&gf7, &a, &b).unwrap();
        assert_eq!(x.values(), &[3, 5, 6]);
    }

    #[test]
    fn test_solve_2x2_gf7() {
        let gf7 = Gf::new(7).unwrap();
        // 1*x0 + 2*x1 = 5
        // 3*x0 + 4*x1 = 6
        let a = array![[1, 2], [3, 4]];
        let b = GfVector::from_values(&gf7, vec![5, 6]).unwrap();

        let x = solve(&gf7, &a, &b).unwrap();

        // Verify by substitution
        let tables = gf7.tables();
        for (row, &rhs) in [5u32, 6].iter().enumerate() {
            let mut acc = 0;
            for col in 0..2 {
                acc = tables.add(acc, tables.mul(a[[row, col]], x.value(col)));
            }
            assert_eq!(acc, rhs);
        }
    }

    #[test]
    fn test_solve_requires_row_swap() {
        let gf5 = Gf::new(5).unwrap();
        // Leading zero forces a pivot swap
        let a = array![[0, 1], [2, 3]];
        let b = GfVector::from_values(&gf5, vec![4, 1]).unwrap();

        let x = solve(&gf5, &a, &b).unwrap();

        let tables = gf5.tables();
        for (row, &rhs) in [4u32, 1].iter().enumerate() {
            let mut acc = 0;
            for col in 0..2 {
                acc = tables.add(acc, tables.mul(a[[row, col]], x.value(col)));
            }
            assert_eq!(acc, rhs);
        }
    }

    #[test]
    fn test_solve_singular() {
        let gf5 = Gf::new(5).unwrap();
        // Second row is 2x the first: rank 1
        let a = array![[1, 2], [2, 4]];
        let b = GfVector::from_values(&gf5, vec![1, 2]).unwrap();

        assert_eq!(
            solve(&gf5, &a, &b),
            Err(Error::SingularMatrix { column: 1 })
        );
    }

    #[test]
    fn test_solve_size_mismatch() {
        let gf5 = Gf::new(5).unwrap();
        let a = array![[1, 2], [3, 4]];
        let b = GfVector::from_values(&gf5, vec![1, 2, 3]).unwrap();

        assert_eq!(
            solve(&gf5, &a, &b),
            Err(Error::SizeMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_solve_gf8() {
        let gf8 = Gf::new(8).unwrap();
        let a = array![[1, 2, 4], [1, 3, 5], [1, 1, 1]];
        let b = GfVector::from_values(&gf8, vec![6, 2, 7]).unwrap();

        let x = solve(&gf8, &a, &b).unwrap();

        let tables = gf8.tables();
        for (row, &rhs) in [6u32, 2, 7].iter().enumerate() {
            let mut acc = 0;
            for col in 0..3 {
                acc = tables.add(acc, tables.mul(a[[row, col]], x.value(col)));
            }
            assert_eq!(acc, rhs);
        }
    }
}
