//! Irreducible polynomials for extension field construction.
//!
//! An irreducible polynomial of degree n over GF(p) is required to construct
//! GF(p^n). The polynomial is represented as a vector of coefficients
//! [c_0, c_1, ..., c_{n-1}] where the polynomial is:
//! x^n + c_{n-1}*x^{n-1} + ... + c_1*x + c_0
//!
//! Note: The leading coefficient (for x^n) is always 1 and is implicit.

/// Lookup table for irreducible polynomials.
///
/// These are primitive polynomials (when possible) for common field orders,
/// keyed by (p, n). The coefficients represent x^n + c_{n-1}*x^{n-1} + ...
/// + c_1*x + c_0 as the vector [c_0, c_1, ..., c_{n-1}].
pub static IRREDUCIBLE_POLYS: &[(u32, u32, &[u32])] = &[
    // GF(2^n) - Binary extension fields
    // x^2 + x + 1
    (2, 2, &[1, 1]),
    // x^3 + x + 1
    (2, 3, &[1, 1, 0]),
    // x^4 + x + 1
    (2, 4, &[1, 1, 0, 0]),
    // x^5 + x^2 + 1
    (2, 5, &[1, 0, 1, 0, 0]),
    // x^6 + x + 1
    (2, 6, &[1, 1, 0, 0, 0, 0]),
    // x^7 + x^3 + 1
    (2, 7, &[1, 0, 0, 1, 0, 0, 0]),
    // x^8 + x^4 + x^3 + x + 1 (AES polynomial)
    (2, 8, &[1, 1, 0, 1, 1, 0, 0, 0]),
    // GF(3^n) - Ternary extension fields
    // x^2 + 1
    (3, 2, &[1, 0]),
    // x^3 + 2x + 1
    (3, 3, &[1, 2, 0]),
    // x^4 + 2x^3 + 2
    (3, 4, &[2, 0, 0, 2]),
    // GF(5^n)
    // x^2 + 2
    (5, 2, &[2, 0]),
    // x^3 + x + 2
    (5, 3, &[2, 1, 0]),
    // GF(7^n)
    // x^2 + 1
    (7, 2, &[1, 0]),
];

/// Get an irreducible polynomial for GF(p^n).
///
/// Returns `None` if no polynomial is available for the given parameters.
#[must_use]
pub fn get_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(poly_p, poly_n, _)| poly_p == p && poly_n == n)
        .map(|&(_, _, coeffs)| coeffs.to_vec())
}

/// Check if an irreducible polynomial is available for GF(p^n).
#[must_use]
pub fn has_irreducible_poly(p: u32, n: u32) -> bool {
    get_irreducible_poly(p, n).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_irreducible_poly() {
        // GF(8) = GF(2^3)
        let poly = get_irreducible_poly(2, 3).unwrap();
        assert_eq!(poly, vec![1, 1, 0]); // x^3 + x + 1

        // GF(9) = GF(3^2)
        let poly = get_irreducible_poly(3, 2).unwrap();
        assert_eq!(poly, vec![1, 0]); // x^2 + 1

        assert!(get_irreducible_poly(17, 5).is_none());
    }

    #[test]
    fn test_has_irreducible_poly() {
        assert!(has_irreducible_poly(2, 2));
        assert!(has_irreducible_poly(2, 8));
        assert!(has_irreducible_poly(3, 2));
        assert!(!has_irreducible_poly(17, 5));
    }
}
