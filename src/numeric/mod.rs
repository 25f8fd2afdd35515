// ============================================================================
// Numeric Module
// Fixed-point arithmetic for exact money and quantity amounts
// ============================================================================
//
// This module provides:
// - Scale: power-of-ten subunits per main unit
// - NominalValue: integer subunit count bound to a Scale
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - The integer subunit count is the only source of truth
// - Main-unit values are derived on demand, exactly via rust_decimal
// - All arithmetic returns Result (no panics)

mod errors;
mod nominal_value;

pub use errors::{NumericError, NumericResult};
pub use nominal_value::{NominalValue, Scale, MAX_PRECISION};
