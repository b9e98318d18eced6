//! Precomputed arithmetic tables for Galois fields.
//!
//! This module provides lookup tables for fast field arithmetic. For the
//! small fields used in interpolation (order < ~1000), table-based arithmetic
//! is significantly faster than computing operations on the fly.
//!
//! Besides the four operation tables, construction also locates the field's
//! canonical primitive element: the smallest element whose powers enumerate
//! every nonzero element exactly once. The interpolation layer indexes its
//! sample points by exponents of this element.

use crate::error::{Error, Result};
use crate::utils::{factor_prime_power, is_prime, mod_pow};

/// Precomputed arithmetic tables for a Galois field.
///
/// The tables allow O(1) field operations at the cost of O(q²) memory
/// for the addition/multiplication tables.
#[derive(Debug, Clone, PartialEq)]
pub struct GfTables {
    /// The order of the field.
    order: u32,
    /// The prime characteristic.
    characteristic: u32,
    /// The extension degree.
    degree: u32,
    /// Multiplication table: mul[a * order + b] = a * b
    mul: Vec<u32>,
    /// Addition table: add[a * order + b] = a + b
    add: Vec<u32>,
    /// Multiplicative inverse table: inv[a] = a^(-1) (inv[0] is undefined)
    inv: Vec<u32>,
    /// Additive inverse (negation) table: neg[a] = -a
    neg: Vec<u32>,
    /// The smallest primitive element (generator of the multiplicative group).
    primitive: u32,
}

impl GfTables {
    /// Create arithmetic tables for a prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not prime.
    pub fn new_prime(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrimePower(p));
        }

        let order = p;
        let size = (order * order) as usize;

        let mut add = vec![0u32; size];
        let mut mul = vec![0u32; size];
        let mut inv = vec![0u32; order as usize];
        let mut neg = vec![0u32; order as usize];

        for a in 0..order {
            for b in 0..order {
                add[(a * order + b) as usize] = (a + b) % order;
            }
            neg[a as usize] = if a == 0 { 0 } else { order - a };
        }

        for a in 0..order {
            for b in 0..order {
                mul[(a * order + b) as usize] =
                    ((u64::from(a) * u64::from(b)) % u64::from(order)) as u32;
            }
        }

        // a^(-1) = a^(p-2) mod p (Fermat's little theorem)
        inv[0] = 0;
        for a in 1..order {
            inv[a as usize] =
                mod_pow(u64::from(a), u64::from(order - 2), u64::from(order)) as u32;
        }

        let primitive = find_primitive(order, &mul);

        Ok(Self {
            order,
            characteristic: p,
            degree: 1,
            mul,
            add,
            inv,
            neg,
            primitive,
        })
    }

    /// Create arithmetic tables for a prime power field GF(p^n).
    ///
    /// This requires an irreducible polynomial of degree n over GF(p).
    ///
    /// # Errors
    ///
    /// Returns an error if `q` is not a prime power or if no irreducible
    /// polynomial is available for this field.
    pub fn new_extension(q: u32) -> Result<Self> {
        let factorization = factor_prime_power(q).ok_or(Error::NotPrimePower(q))?;

        if factorization.exponent == 1 {
            // This is actually a prime field
            return Self::new_prime(q);
        }

        let p = factorization.prime;
        let n = factorization.exponent;

        let irr_poly = super::poly::get_irreducible_poly(p, n)
            .ok_or(Error::NoIrreduciblePolynomial(q))?;

        Self::build_extension_tables(p, n, &irr_poly)
    }

    /// Build tables for an extension field given an irreducible polynomial.
    fn build_extension_tables(p: u32, n: u32, irr_poly: &[u32]) -> Result<Self> {
        let order = p.pow(n);
        let size = (order * order) as usize;

        let mut add = vec![0u32; size];
        let mut mul = vec![0u32; size];
        let mut inv = vec![0u32; order as usize];
        let mut neg = vec![0u32; order as usize];

        // Elements of GF(p^n) are polynomials of degree < n over GF(p),
        // encoded as integers: a_0 + a_1*p + ... + a_{n-1}*p^{n-1}

        for a in 0..order {
            for b in 0..order {
                add[(a * order + b) as usize] = poly_add(a, b, p, n);
            }
            neg[a as usize] = poly_neg(a, p, n);
        }

        for a in 0..order {
            for b in 0..order {
                mul[(a * order + b) as usize] = poly_mul(a, b, p, n, irr_poly);
            }
        }

        inv[0] = 0;
        for a in 1..order {
            inv[a as usize] = poly_inv(a, &mul, order);
        }

        let primitive = find_primitive(order, &mul);

        Ok(Self {
            order,
            characteristic: p,
            degree: n,
            mul,
            add,
            inv,
            neg,
            primitive,
        })
    }

    /// Get the field order.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the field characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// Get the extension degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Get the smallest primitive element of the field.
    ///
    /// Its powers g^0, g^1, ..., g^(q-2) enumerate all nonzero elements
    /// exactly once; zero is not a power of it.
    #[must_use]
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// Add two field elements.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else {
            self.add[(a * self.order + b) as usize]
        }
    }

    /// Subtract two field elements.
    #[must_use]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else {
            self.add[(a * self.order + self.neg[b as usize]) as usize]
        }
    }

    /// Multiply two field elements.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        self.mul[(a * self.order + b) as usize]
    }

    /// Divide two field elements.
    ///
    /// # Panics
    ///
    /// Panics if b is zero.
    #[must_use]
    pub fn div(&self, a: u32, b: u32) -> u32 {
        assert!(b != 0, "division by zero");
        self.mul[(a * self.order + self.inv[b as usize]) as usize]
    }

    /// Get the additive inverse (negation) of an element.
    #[must_use]
    pub fn neg(&self, a: u32) -> u32 {
        self.neg[a as usize]
    }

    /// Get the multiplicative inverse of an element.
    ///
    /// # Panics
    ///
    /// Panics if a is zero.
    #[must_use]
    pub fn inv(&self, a: u32) -> u32 {
        assert!(a != 0, "inverse of zero");
        self.inv[a as usize]
    }

    /// Compute a^exp using repeated squaring with table lookups.
    #[must_use]
    pub fn pow(&self, mut base: u32, mut exp: u32) -> u32 {
        let mut result = 1u32;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            exp >>= 1;
            base = self.mul(base, base);
        }
        result
    }
}

/// Find the smallest element whose multiplicative order is `order - 1`.
///
/// Every finite field has a cyclic multiplicative group, so the search always
/// succeeds for valid tables.
fn find_primitive(order: u32, mul_table: &[u32]) -> u32 {
    let units = order - 1;

    for candidate in 2..order {
        let mut x = candidate;
        let mut steps = 1u32;
        while x != 1 {
            x = mul_table[(x * order + candidate) as usize];
            steps += 1;
        }
        if steps == units {
            return candidate;
        }
    }

    // GF(2) is the only field whose sole unit is 1
    1
}

/// Add two polynomials represented as integers (coefficient-wise mod p).
fn poly_add(a: u32, b: u32, p: u32, n: u32) -> u32 {
    let mut result = 0u32;
    let mut pow_p = 1u32;
    let mut a = a;
    let mut b = b;

    for _ in 0..n {
        let coef_a = a % p;
        let coef_b = b % p;
        let sum = (coef_a + coef_b) % p;
        result += sum * pow_p;

        a /= p;
        b /= p;
        pow_p *= p;
    }

    result
}

/// Negate a polynomial (negate each coefficient mod p).
fn poly_neg(a: u32, p: u32, n: u32) -> u32 {
    let mut result = 0u32;
    let mut pow_p = 1u32;
    let mut a = a;

    for _ in 0..n {
        let coef = a % p;
        let neg_coef = if coef == 0 { 0 } else { p - coef };
        result += neg_coef * pow_p;

        a /= p;
        pow_p *= p;
    }

    result
}

/// Multiply two polynomials and reduce modulo the irreducible polynomial.
fn poly_mul(a: u32, b: u32, p: u32, n: u32, irr_poly: &[u32]) -> u32 {
    let mut a_coeffs = vec![0u32; n as usize];
    let mut b_coeffs = vec![0u32; n as usize];
    let mut temp_a = a;
    let mut temp_b = b;

    for i in 0..n as usize {
        a_coeffs[i] = temp_a % p;
        b_coeffs[i] = temp_b % p;
        temp_a /= p;
        temp_b /= p;
    }

    // Multiply polynomials (result has degree up to 2n-2)
    let mut product = vec![0u32; (2 * n - 1) as usize];
    for i in 0..n as usize {
        for j in 0..n as usize {
            product[i + j] = (product[i + j] + a_coeffs[i] * b_coeffs[j]) % p;
        }
    }

    // Reduce modulo the irreducible polynomial: irr_poly represents
    // x^n + c_{n-1}*x^{n-1} + ... + c_0, so
    // x^n = -c_{n-1}*x^{n-1} - ... - c_0 (mod irr_poly)
    for i in ((n as usize)..product.len()).rev() {
        if product[i] != 0 {
            let coef = product[i];
            product[i] = 0;
            for j in 0..n as usize {
                let sub = (coef * irr_poly[j]) % p;
                product[i - n as usize + j] = (product[i - n as usize + j] + p - sub) % p;
            }
        }
    }

    let mut result = 0u32;
    let mut pow_p = 1u32;
    for &coef in product.iter().take(n as usize) {
        result += coef * pow_p;
        pow_p *= p;
    }

    result
}

/// Find the multiplicative inverse by searching the multiplication table.
fn poly_inv(a: u32, mul_table: &[u32], order: u32) -> u32 {
    if a == 0 {
        return 0;
    }

    for x in 1..order {
        if mul_table[(a * order + x) as usize] == 1 {
            return x;
        }
    }

    // Unreachable for a valid field element
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_field_tables() {
        let gf7 = GfTables::new_prime(7).unwrap();

        assert_eq!(gf7.add(3, 5), 1); // 3 + 5 = 8 ≡ 1 (mod 7)
        assert_eq!(gf7.mul(3, 5), 1); // 3 * 5 = 15 ≡ 1 (mod 7)

        for a in 1..7u32 {
            assert_eq!(gf7.mul(a, gf7.inv(a)), 1, "a={a}");
        }
        for a in 0..7u32 {
            assert_eq!(gf7.add(a, gf7.neg(a)), 0, "a={a}");
        }
    }

    #[test]
    fn test_gf8_extension() {
        // GF(8) = GF(2^3) with irreducible polynomial x^3 + x + 1
        let gf8 = GfTables::new_extension(8).unwrap();

        assert_eq!(gf8.order(), 8);
        assert_eq!(gf8.characteristic(), 2);
        assert_eq!(gf8.degree(), 3);

        // In GF(2^n), addition is XOR
        for a in 0..8u32 {
            assert_eq!(gf8.add(a, a), 0);
        }

        for a in 1..8u32 {
            assert_eq!(gf8.mul(a, gf8.inv(a)), 1, "a={a}");
        }
    }

    #[test]
    fn test_primitive_element_enumerates_units() {
        for q in [2u32, 3, 4, 5, 7, 8, 9, 11, 13, 16] {
            let gf = GfTables::new_extension(q).unwrap();
            let g = gf.primitive();

            let mut seen = vec![false; q as usize];
            for i in 0..(q - 1) {
                let v = gf.pow(g, i) as usize;
                assert_ne!(v, 0, "powers of the primitive element are nonzero");
                assert!(!seen[v], "g^{i} repeats in GF({q})");
                seen[v] = true;
            }
            // All q-1 units covered
            assert!(seen[1..].iter().all(|&s| s), "GF({q}) units all reached");
        }
    }

    #[test]
    fn test_primitive_element_gf7() {
        // 3 is the smallest primitive root modulo 7 (2 has order 3)
        let gf7 = GfTables::new_prime(7).unwrap();
        assert_eq!(gf7.primitive(), 3);
    }

    #[test]
    fn test_primitive_element_gf2() {
        let gf2 = GfTables::new_prime(2).unwrap();
        assert_eq!(gf2.primitive(), 1);
    }

    #[test]
    fn test_pow_table() {
        let gf7 = GfTables::new_prime(7).unwrap();
        assert_eq!(gf7.pow(3, 0), 1);
        assert_eq!(gf7.pow(3, 2), 2); // 9 mod 7
        assert_eq!(gf7.pow(3, 6), 1); // Fermat's little theorem
    }

    #[test]
    fn test_not_prime_power() {
        assert!(GfTables::new_prime(6).is_err());
        assert!(GfTables::new_extension(6).is_err());
        assert!(GfTables::new_extension(10).is_err());
    }
}
