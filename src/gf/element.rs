//! Dynamic Galois field and element types.
//!
//! This module provides a runtime-configured Galois field where the order is
//! determined at runtime rather than compile time, which is what the
//! interpolation layer needs: the field order is an input, not a constant.
//!
//! A [`Gf`] is a cheap-to-clone handle over precomputed arithmetic tables;
//! a [`GfElement`] couples a value with the field it belongs to. Mixing
//! elements of different fields is a programming error and fails fast.

use std::fmt;
use std::sync::Arc;

use super::GfTables;
use crate::error::{Error, Result};

/// A dynamically-configured Galois field.
///
/// This struct holds the precomputed arithmetic tables for a Galois field
/// of order q = p^n, where p is prime and n >= 1. The field is
/// reference-counted internally, so cloning is cheap and every element,
/// vector, and polynomial built from it shares the same tables.
///
/// # Example
///
/// ```
/// use polydfa::gf::Gf;
///
/// let gf8 = Gf::new(8).unwrap();
/// let a = gf8.element(3);
/// let b = gf8.element(5);
///
/// let sum = a.add(&b);
/// assert_eq!(sum.value(), 6); // in GF(2^3), addition is XOR
/// ```
#[derive(Clone, PartialEq)]
pub struct Gf {
    tables: Arc<GfTables>,
}

impl Gf {
    /// Create a new Galois field of the given order.
    ///
    /// The order must be a prime power (p^n for some prime p and n >= 1).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The order is not a prime power
    /// - No irreducible polynomial is available for extension fields
    ///
    /// # Example
    ///
    /// ```
    /// use polydfa::gf::Gf;
    ///
    /// let gf7 = Gf::new(7).unwrap();  // Prime field
    /// let gf8 = Gf::new(8).unwrap();  // Extension field GF(2^3)
    ///
    /// assert!(Gf::new(6).is_err());   // 6 is not a prime power
    /// ```
    pub fn new(order: u32) -> Result<Self> {
        let tables = GfTables::new_extension(order)?;
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Get the field order (number of elements).
    #[must_use]
    pub fn order(&self) -> u32 {
        self.tables.order()
    }

    /// Get the field characteristic (the prime p where q = p^n).
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.tables.characteristic()
    }

    /// Get the extension degree (n where q = p^n).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.degree()
    }

    /// Get the canonical primitive element of the field.
    ///
    /// Its powers g^0, g^1, ..., g^(q-2) enumerate all nonzero field
    /// elements exactly once. The interpolation layer evaluates a
    /// polynomial "at exponent i" by evaluating at g^i.
    #[must_use]
    pub fn primitive_element(&self) -> GfElement {
        self.element(self.tables.primitive())
    }

    /// Create a field element from an integer value.
    ///
    /// Values outside [0, order) are reduced modulo the order. Use
    /// [`Gf::try_element`] to reject out-of-range values instead.
    #[must_use]
    pub fn element(&self, value: u32) -> GfElement {
        GfElement {
            value: value % self.tables.order(),
            field: self.clone(),
        }
    }

    /// Create a field element, rejecting out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `value >= order`.
    pub fn try_element(&self, value: u32) -> Result<GfElement> {
        if value >= self.order() {
            return Err(Error::ElementOutOfRange {
                value,
                order: self.order(),
            });
        }
        Ok(GfElement {
            value,
            field: self.clone(),
        })
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> GfElement {
        self.element(0)
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> GfElement {
        self.element(1)
    }

    /// Iterate over all elements of the field.
    pub fn elements(&self) -> impl Iterator<Item = GfElement> + '_ {
        (0..self.order()).map(move |v| self.element(v))
    }

    /// Iterate over all non-zero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = GfElement> + '_ {
        (1..self.order()).map(move |v| self.element(v))
    }

    /// Check whether two field handles denote the same field.
    #[must_use]
    pub fn same_field(&self, other: &Self) -> bool {
        self.order() == other.order()
    }

    /// Access the underlying tables for direct operations.
    #[must_use]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }
}

impl fmt::Debug for Gf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() == 1 {
            write!(f, "GF({})", self.order())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.degree())
        }
    }
}

impl fmt::Display for Gf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() == 1 {
            write!(f, "GF({})", self.order())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.degree())
        }
    }
}

/// An element of a dynamic Galois field.
///
/// This type holds both the element value and a handle to the field.
/// Arithmetic operations are performed using the field's precomputed tables.
///
/// # Panics
///
/// All binary operations panic if the operands belong to fields of
/// different orders; mixing fields is a programming error, never silently
/// coerced.
#[derive(Clone)]
pub struct GfElement {
    value: u32,
    field: Gf,
}

impl GfElement {
    /// Get the integer representation of this element.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &Gf {
        &self.field
    }

    /// Check if this element is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    fn assert_same_field(&self, rhs: &Self) {
        assert!(
            self.field.same_field(&rhs.field),
            "arithmetic between elements of different fields: {} vs {}",
            self.field,
            rhs.field
        );
    }

    /// Additive inverse (-a).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            value: self.field.tables.neg(self.value),
            field: self.field.clone(),
        }
    }

    /// Multiplicative inverse (a^(-1)).
    ///
    /// # Panics
    ///
    /// Panics if called on zero.
    #[must_use]
    pub fn inv(&self) -> Self {
        assert!(!self.is_zero(), "cannot compute inverse of zero");
        Self {
            value: self.field.tables.inv(self.value),
            field: self.field.clone(),
        }
    }

    /// Checked multiplicative inverse.
    ///
    /// Returns `None` if called on zero.
    #[must_use]
    pub fn checked_inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self {
                value: self.field.tables.inv(self.value),
                field: self.field.clone(),
            })
        }
    }

    /// Field addition.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        Self {
            value: self.field.tables.add(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field subtraction.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        Self {
            value: self.field.tables.sub(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field multiplication.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        Self {
            value: self.field.tables.mul(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Field division.
    ///
    /// # Panics
    ///
    /// Panics if rhs is zero.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        assert!(!rhs.is_zero(), "division by zero");
        Self {
            value: self.field.tables.div(self.value, rhs.value),
            field: self.field.clone(),
        }
    }

    /// Checked field division.
    ///
    /// Returns `None` if rhs is zero.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.assert_same_field(rhs);
        if rhs.is_zero() {
            None
        } else {
            Some(Self {
                value: self.field.tables.div(self.value, rhs.value),
                field: self.field.clone(),
            })
        }
    }

    /// Exponentiation by squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self {
            value: self.field.tables.pow(self.value, exp),
            field: self.field.clone(),
        }
    }

    /// Exponentiation supporting negative exponents.
    ///
    /// A negative exponent inverts the base first, which requires the base
    /// to be a unit of the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonInvertible`] for a negative exponent on zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn checked_pow(&self, exp: i64) -> Result<Self> {
        if exp >= 0 {
            return Ok(self.pow(exp.unsigned_abs() as u32));
        }

        let inverse = self.checked_inv().ok_or(Error::NonInvertible {
            value: self.value,
            order: self.field.order(),
        })?;
        Ok(inverse.pow(exp.unsigned_abs() as u32))
    }
}

impl PartialEq for GfElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.order() == other.field.order()
    }
}

impl Eq for GfElement {}

impl std::hash::Hash for GfElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.field.order().hash(state);
    }
}

impl fmt::Debug for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl fmt::Display for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Standard operators, by value, matching the method semantics
impl std::ops::Add for GfElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        GfElement::add(&self, &rhs)
    }
}

impl std::ops::Sub for GfElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        GfElement::sub(&self, &rhs)
    }
}

impl std::ops::Mul for GfElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        GfElement::mul(&self, &rhs)
    }
}

impl std::ops::Div for GfElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        GfElement::div(&self, &rhs)
    }
}

impl std::ops::Neg for GfElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        GfElement::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf7_creation() {
        let gf7 = Gf::new(7).unwrap();
        assert_eq!(gf7.order(), 7);
        assert_eq!(gf7.characteristic(), 7);
        assert_eq!(gf7.degree(), 1);
    }

    #[test]
    fn test_gf8_creation() {
        let gf8 = Gf::new(8).unwrap();
        assert_eq!(gf8.order(), 8);
        assert_eq!(gf8.characteristic(), 2);
        assert_eq!(gf8.degree(), 3);
    }

    #[test]
    fn test_invalid_order() {
        assert!(Gf::new(6).is_err());
        assert!(Gf::new(10).is_err());
        assert!(Gf::new(1).is_err());
        assert!(Gf::new(0).is_err());
    }

    #[test]
    fn test_element_arithmetic() {
        let gf7 = Gf::new(7).unwrap();
        let a = gf7.element(3);
        let b = gf7.element(5);

        assert_eq!(a.add(&b).value(), 1);
        assert_eq!(a.sub(&b).value(), 5); // 3 - 5 = -2 ≡ 5 (mod 7)
        assert_eq!(a.mul(&b).value(), 1);
        assert_eq!(a.div(&b).value(), 2); // 3 / 5 = 3 * 3 = 9 ≡ 2 (mod 7)
    }

    #[test]
    fn test_element_operators() {
        let gf5 = Gf::new(5).unwrap();
        let a = gf5.element(3);
        let b = gf5.element(2);

        assert_eq!((a.clone() + b.clone()).value(), 0);
        assert_eq!((a.clone() - b.clone()).value(), 1);
        assert_eq!((a.clone() * b.clone()).value(), 1);
        assert_eq!((a / b).value(), 4); // 3 / 2 = 3 * 3 = 9 ≡ 4 (mod 5)
    }

    #[test]
    fn test_try_element() {
        let gf5 = Gf::new(5).unwrap();
        assert_eq!(gf5.try_element(4).unwrap().value(), 4);
        assert_eq!(
            gf5.try_element(5),
            Err(Error::ElementOutOfRange { value: 5, order: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "different fields")]
    fn test_cross_field_arithmetic_fails_fast() {
        let gf5 = Gf::new(5).unwrap();
        let gf7 = Gf::new(7).unwrap();
        let _ = gf5.element(2).add(&gf7.element(2));
    }

    #[test]
    fn test_checked_pow_negative_exponent() {
        let gf7 = Gf::new(7).unwrap();
        let a = gf7.element(3);

        // 3^(-1) = 5 in GF(7)
        assert_eq!(a.checked_pow(-1).unwrap().value(), 5);
        // 3^(-2) = 5^2 = 25 ≡ 4
        assert_eq!(a.checked_pow(-2).unwrap().value(), 4);

        let zero = gf7.zero();
        assert_eq!(
            zero.checked_pow(-1),
            Err(Error::NonInvertible { value: 0, order: 7 })
        );
        // Nonnegative exponents on zero are fine
        assert_eq!(zero.checked_pow(0).unwrap().value(), 1);
        assert_eq!(zero.checked_pow(3).unwrap().value(), 0);
    }

    #[test]
    fn test_field_iteration() {
        let gf5 = Gf::new(5).unwrap();

        let elements: Vec<u32> = gf5.elements().map(|e| e.value()).collect();
        assert_eq!(elements, vec![0, 1, 2, 3, 4]);

        let units: Vec<u32> = gf5.units().map(|e| e.value()).collect();
        assert_eq!(units, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_primitive_element_powers() {
        let gf8 = Gf::new(8).unwrap();
        let g = gf8.primitive_element();

        let mut seen: Vec<u32> = (0..7).map(|i| g.pow(i).value()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display() {
        let gf7 = Gf::new(7).unwrap();
        assert_eq!(format!("{gf7}"), "GF(7)");

        let gf8 = Gf::new(8).unwrap();
        assert_eq!(format!("{gf8}"), "GF(2^3)");

        let elem = gf7.element(5);
        assert_eq!(format!("{elem}"), "5");
    }
}
