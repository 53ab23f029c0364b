//! Error types for dimensional arithmetic.

use thiserror::Error;

/// Result type for fallible quantity operations.
pub type Result<T> = std::result::Result<T, QuantityError>;

/// Errors raised by dimensional arithmetic.
///
/// Every failure is synchronous and immediate: the core never retries and
/// never coerces silently. Each variant carries enough rendered context
/// (offending dimensions and values) to diagnose the failure without
/// re-deriving it at the call site.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// Two operands with different dimensions were added, subtracted, or
    /// compared.
    #[error("dimension mismatch: cannot combine `{left}` with `{right}`")]
    DimensionMismatch {
        /// Rendering of the left operand (value and dimension).
        left: String,
        /// Rendering of the right operand (value and dimension).
        right: String,
    },

    /// A dimensionless-only function (trigonometric, logarithmic,
    /// exponential) received a dimensioned input.
    #[error("`{function}` requires a dimensionless argument, got `{quantity}`")]
    DimensionError {
        /// Name of the offending function.
        function: &'static str,
        /// Rendering of the offending quantity.
        quantity: String,
    },

    /// A requested exponent cannot be represented exactly in the dimension's
    /// exponent type.
    #[error(
        "cannot represent exponent {requested} as {representation} ({limits})"
    )]
    RationalizeError {
        /// The exponent that was requested.
        requested: f64,
        /// Name of the target exponent representation.
        representation: &'static str,
        /// Human-readable description of the representation's limits.
        limits: &'static str,
    },

    /// A dimensioned value was written into an array slot that stores bare
    /// numeric values.
    #[error(
        "cannot assign quantity `{value}` to element {index}: a QuantityArray \
         stores bare values sharing one dimension; check the dimension \
         yourself and store the stripped value instead"
    )]
    InvalidAssignment {
        /// Index of the rejected write.
        index: usize,
        /// Rendering of the rejected quantity.
        value: String,
    },

    /// An array access addressed a slot that does not exist.
    #[error("index {index} out of bounds for a quantity array of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
}
