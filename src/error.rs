//! Error types for the polydfa library.
//!
//! This module provides comprehensive error handling using the `thiserror`
//! crate, with specific error variants for Galois field construction, element
//! and vector validation, linear solving, and partitioned interpolation.
//!
//! Every error is raised at the point of detection; no operation inside the
//! library retries, and no partial result is ever returned alongside an error.

use thiserror::Error;

/// The main error type for the polydfa library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Galois Field Errors ============
    /// The specified order is not a prime power.
    #[error("order {0} is not a prime power (must be p^k for prime p and k >= 1)")]
    NotPrimePower(u32),

    /// No irreducible polynomial is known for the specified field order.
    #[error("no irreducible polynomial available for GF({0})")]
    NoIrreduciblePolynomial(u32),

    /// Element value is out of range for the specified field.
    #[error("element {value} is out of range for GF({order}), must be in 0..{order}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The order of the field.
        order: u32,
    },

    /// Operands belong to fields of different orders.
    #[error("field mismatch: GF({left}) vs GF({right})")]
    FieldMismatch {
        /// Order of the left operand's field.
        left: u32,
        /// Order of the right operand's field.
        right: u32,
    },

    /// A multiplicative inverse was requested for an element that has none.
    #[error("element {value} has no multiplicative inverse in GF({order})")]
    NonInvertible {
        /// The non-invertible element value.
        value: u32,
        /// The order of the field.
        order: u32,
    },

    // ============ Interpolation Errors ============
    /// A vector length does not match the expected count.
    #[error("size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch {
        /// The expected length.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// The linear system has no unique solution.
    #[error("singular matrix: no nonzero pivot in column {column}")]
    SingularMatrix {
        /// The column in which elimination found no nonzero pivot.
        column: usize,
    },

    /// The (x, y) coordinates do not form a complete rectangular grid.
    #[error(
        "coordinates must form a complete rectangular grid with no duplicates: \
         {distinct_x} distinct x values and {distinct_y} distinct y values \
         require {distinct_x}*{distinct_y} samples, got {samples}"
    )]
    IncompleteGrid {
        /// Number of distinct x values observed.
        distinct_x: usize,
        /// Number of distinct y values observed.
        distinct_y: usize,
        /// Number of samples supplied.
        samples: usize,
    },

    // ============ Partition Errors ============
    /// The partition descriptor is inconsistent.
    #[error("invalid partition: index {index} must be less than count {count}, count must be >= 1")]
    InvalidPartition {
        /// The worker index.
        index: usize,
        /// The worker count.
        count: usize,
    },
}

/// A specialized `Result` type for polydfa operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
