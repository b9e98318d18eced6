//! Fixed-length, field-tagged vectors.
//!
//! A [`GfVector`] is an ordered sequence of field elements of fixed length,
//! associated with exactly one field. It serves both as a raw sample vector
//! and as a polynomial coefficient vector (index = degree, ascending).
//!
//! Lengths are established at construction and never reshaped; every
//! operation that combines two vectors checks lengths and fields up front
//! and fails with a specific error rather than silently adjusting.

use rand::Rng;

use super::{Gf, GfElement};
use crate::error::{Error, Result};

/// An ordered, fixed-length sequence of elements of one Galois field.
///
/// Values are stored in their integer representation and arithmetic goes
/// through the field's precomputed tables, so bulk operations avoid
/// per-element handle cloning.
///
/// # Example
///
/// ```
/// use polydfa::gf::{Gf, GfVector};
///
/// let gf8 = Gf::new(8).unwrap();
/// let v = GfVector::from_values(&gf8, vec![1, 2, 3]).unwrap();
/// let w = GfVector::from_values(&gf8, vec![4, 5, 6]).unwrap();
///
/// // 1*4 + 2*5 + 3*6 = 4 + 1 + 1 over GF(2^3)
/// let d = v.dot(&w).unwrap();
/// assert_eq!(d.value(), 4);
/// ```
#[derive(Clone)]
pub struct GfVector {
    values: Vec<u32>,
    field: Gf,
}

impl GfVector {
    /// Create a vector from integer values, rejecting out-of-range entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if any value is `>= order`.
    pub fn from_values(field: &Gf, values: Vec<u32>) -> Result<Self> {
        let order = field.order();
        for &value in &values {
            if value >= order {
                return Err(Error::ElementOutOfRange { value, order });
            }
        }
        Ok(Self {
            values,
            field: field.clone(),
        })
    }

    /// Create a vector of zeros.
    #[must_use]
    pub fn zeros(field: &Gf, len: usize) -> Self {
        Self {
            values: vec![0; len],
            field: field.clone(),
        }
    }

    /// Create a vector of uniformly random field elements.
    ///
    /// The generator is caller-supplied so that tests and distributed
    /// callers can seed it deterministically.
    pub fn random<R: Rng>(field: &Gf, len: usize, rng: &mut R) -> Self {
        let order = field.order();
        Self {
            values: (0..len).map(|_| rng.gen_range(0..order)).collect(),
            field: field.clone(),
        }
    }

    /// Get the length of the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the field this vector belongs to.
    #[must_use]
    pub fn field(&self) -> &Gf {
        &self.field
    }

    /// Get the integer value at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn value(&self, index: usize) -> u32 {
        self.values[index]
    }

    /// Get the element at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> GfElement {
        self.field.element(self.values[index])
    }

    /// Set the element at an index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds or the element belongs to a
    /// different field.
    pub fn set(&mut self, index: usize, element: &GfElement) {
        assert!(
            self.field.same_field(element.field()),
            "cannot store an element of {} in a {} vector",
            element.field(),
            self.field
        );
        self.values[index] = element.value();
    }

    /// View the integer values.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Consume the vector and return the integer values.
    #[must_use]
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = GfElement> + '_ {
        self.values.iter().map(move |&v| self.field.element(v))
    }

    fn check_compatible(&self, rhs: &Self) -> Result<()> {
        if !self.field.same_field(&rhs.field) {
            return Err(Error::FieldMismatch {
                left: self.field.order(),
                right: rhs.field.order(),
            });
        }
        if self.len() != rhs.len() {
            return Err(Error::SizeMismatch {
                expected: self.len(),
                actual: rhs.len(),
            });
        }
        Ok(())
    }

    /// Dot product over the field.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in field or length.
    pub fn dot(&self, rhs: &Self) -> Result<GfElement> {
        self.check_compatible(rhs)?;

        let tables = self.field.tables();
        let mut acc = 0u32;
        for (&a, &b) in self.values.iter().zip(&rhs.values) {
            acc = tables.add(acc, tables.mul(a, b));
        }
        Ok(self.field.element(acc))
    }

    /// Element-wise power: raises every entry to the scalar exponent.
    #[must_use]
    pub fn pow_scalar(&self, exp: u32) -> Self {
        let tables = self.field.tables();
        Self {
            values: self.values.iter().map(|&v| tables.pow(v, exp)).collect(),
            field: self.field.clone(),
        }
    }

    /// Element-wise sum over the field.
    ///
    /// This is the reduction primitive: summing disjoint partitioned
    /// coefficient vectors yields the complete vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands differ in field or length.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_compatible(rhs)?;

        let tables = self.field.tables();
        Ok(Self {
            values: self
                .values
                .iter()
                .zip(&rhs.values)
                .map(|(&a, &b)| tables.add(a, b))
                .collect(),
            field: self.field.clone(),
        })
    }
}

impl PartialEq for GfVector {
    fn eq(&self, other: &Self) -> bool {
        self.field.same_field(&other.field) && self.values == other.values
    }
}

impl Eq for GfVector {}

impl std::fmt::Debug for GfVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:?}", self.field, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_values_range_check() {
        let gf5 = Gf::new(5).unwrap();
        assert!(GfVector::from_values(&gf5, vec![0, 4, 2]).is_ok());
        assert_eq!(
            GfVector::from_values(&gf5, vec![0, 5]),
            Err(Error::ElementOutOfRange { value: 5, order: 5 })
        );
    }

    #[test]
    fn test_dot_product() {
        let gf7 = Gf::new(7).unwrap();
        let v = GfVector::from_values(&gf7, vec![1, 2, 3]).unwrap();
        let w = GfVector::from_values(&gf7, vec![4, 5, 6]).unwrap();

        // 4 + 10 + 18 = 32 ≡ 4 (mod 7)
        assert_eq!(v.dot(&w).unwrap().value(), 4);
    }

    #[test]
    fn test_dot_size_mismatch() {
        let gf7 = Gf::new(7).unwrap();
        let v = GfVector::from_values(&gf7, vec![1, 2, 3]).unwrap();
        let w = GfVector::from_values(&gf7, vec![4, 5]).unwrap();

        assert_eq!(
            v.dot(&w),
            Err(Error::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_dot_field_mismatch() {
        let gf5 = Gf::new(5).unwrap();
        let gf7 = Gf::new(7).unwrap();
        let v = GfVector::from_values(&gf5, vec![1, 2]).unwrap();
        let w = GfVector::from_values(&gf7, vec![1, 2]).unwrap();

        assert_eq!(v.dot(&w), Err(Error::FieldMismatch { left: 5, right: 7 }));
    }

    #[test]
    fn test_pow_scalar() {
        let gf7 = Gf::new(7).unwrap();
        let v = GfVector::from_values(&gf7, vec![0, 1, 2, 3]).unwrap();

        assert_eq!(v.pow_scalar(0).values(), &[1, 1, 1, 1]);
        assert_eq!(v.pow_scalar(1).values(), &[0, 1, 2, 3]);
        assert_eq!(v.pow_scalar(2).values(), &[0, 1, 4, 2]); // 9 mod 7 = 2
    }

    #[test]
    fn test_elementwise_add() {
        let gf8 = Gf::new(8).unwrap();
        let v = GfVector::from_values(&gf8, vec![1, 2, 3]).unwrap();
        let w = GfVector::from_values(&gf8, vec![5, 2, 1]).unwrap();

        // XOR in characteristic 2
        assert_eq!(v.add(&w).unwrap().values(), &[4, 0, 2]);
    }

    #[test]
    fn test_random_is_deterministic_with_seed() {
        let gf8 = Gf::new(8).unwrap();
        let mut rng1 = StdRng::seed_from_u64(0);
        let mut rng2 = StdRng::seed_from_u64(0);

        let v1 = GfVector::random(&gf8, 7, &mut rng1);
        let v2 = GfVector::random(&gf8, 7, &mut rng2);

        assert_eq!(v1, v2);
        assert!(v1.values().iter().all(|&v| v < 8));
    }
}
