// ============================================================================
// Currency Column Type
// Stores a currency as its three letter code
// ============================================================================

use crate::domain::Currency;
use crate::interfaces::{CodecResult, ColumnType, ColumnValue};

/// Fixed-width `CHAR(3)` column holding a currency code
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyType;

impl ColumnType for CurrencyType {
    type Value = Currency;

    fn name(&self) -> &'static str {
        "currency"
    }

    fn sql_declaration(&self) -> &'static str {
        "CHAR(3)"
    }

    fn encode(&self, currency: &Currency) -> String {
        currency.code().to_string()
    }

    fn decode(&self, value: ColumnValue<'_>) -> CodecResult<Currency> {
        let code = self.expect_text(value, "Currency code")?;
        Currency::from_code(code).map_err(|_| self.conversion_failed(code))
    }
}
