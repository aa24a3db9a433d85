// ============================================================================
// Numeric Errors
// Error types for scaled-integer decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Scaled integer exceeded the i128 range
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
    /// Requested scale is smaller than the operand's decimal-place count
    ScaleMismatch,
    /// Value is NaN or infinite and has no decimal text form
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: scaled integer out of range")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleMismatch => {
                write!(f, "scale mismatch: target scale below operand precision")
            },
            NumericError::NonFinite => write!(f, "non-finite value: no decimal representation"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
