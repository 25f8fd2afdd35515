// ============================================================================
// Persistence Module
// Column codecs for storing units alongside amounts
// ============================================================================
//
// Amounts are stored by the caller as integer subunits; only the unit needs
// a codec. Both codecs share the three character column width.

mod currency_type;
mod measure_unit_type;

pub use currency_type::CurrencyType;
pub use measure_unit_type::MeasureUnitType;

/// Width of every unit column
pub const COLUMN_LENGTH: usize = 3;
