// ============================================================================
// Numeric Errors
// Error types for fixed-point arithmetic operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur during fixed-point arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Result exceeded i64::MAX
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below i64::MIN
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// NaN or infinite input, or a float operation that produced one
    #[error("invalid input: value is not a finite number")]
    NotFinite,
    /// Subunit count is not a power of ten within the supported precision
    #[error("invalid scale: {0} subunits per main unit is not a supported power of ten")]
    InvalidScale(i64),
    /// More decimal places than an i64 subunit count can carry
    #[error("invalid precision: {0} exceeds the maximum of 18 decimal places")]
    PrecisionOutOfRange(u8),
    /// Operands carry different scales
    #[error("scale mismatch between operands ({left} != {right} decimals)")]
    ScaleMismatch { left: u8, right: u8 },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
