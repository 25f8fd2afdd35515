// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod column_type;

pub use column_type::{CodecError, CodecResult, ColumnType, ColumnValue};
