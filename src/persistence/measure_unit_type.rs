// ============================================================================
// Measure Unit Column Type
// Stores a measure unit as its symbol
// ============================================================================

use crate::domain::MeasureUnit;
use crate::interfaces::{CodecResult, ColumnType, ColumnValue};

/// `VARCHAR(3)` column holding a measure unit symbol
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasureUnitType;

impl ColumnType for MeasureUnitType {
    type Value = MeasureUnit;

    fn name(&self) -> &'static str {
        "measure_unit"
    }

    fn sql_declaration(&self) -> &'static str {
        "VARCHAR(3)"
    }

    fn encode(&self, unit: &MeasureUnit) -> String {
        unit.symbol().to_string()
    }

    fn decode(&self, value: ColumnValue<'_>) -> CodecResult<MeasureUnit> {
        let symbol = self.expect_text(value, "Measure unit symbol")?;
        MeasureUnit::from_symbol(symbol).map_err(|_| self.conversion_failed(symbol))
    }
}
