// ============================================================================
// Column Type Interface
// Defines the contract for mapping a unit to a fixed-width string column
// ============================================================================

use thiserror::Error;

/// Raw value read from a database column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Null,
    Text(&'a str),
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl ColumnValue<'_> {
    /// Name of the column value's type, used in diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::Text(_) => "string",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Real(_) => "double",
            ColumnValue::Boolean(_) => "boolean",
        }
    }
}

impl<'a> From<&'a str> for ColumnValue<'a> {
    fn from(text: &'a str) -> Self {
        ColumnValue::Text(text)
    }
}

impl<'a> From<Option<&'a str>> for ColumnValue<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(ColumnValue::Null, ColumnValue::Text)
    }
}

/// Errors raised at the persistence boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Text column holds a code outside the supported catalog
    #[error("Could not convert database value \"{value}\" to type {type_name}.")]
    ConversionFailed {
        value: String,
        type_name: &'static str,
    },

    /// Column holds something other than text
    #[error("{0}")]
    InvalidArgument(String),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Bidirectional codec between a unit descriptor and its column text.
/// Implementations: CurrencyType, MeasureUnitType
pub trait ColumnType: Send + Sync {
    /// Value the column decodes into
    type Value;

    /// Type name registered with the mapping layer
    fn name(&self) -> &'static str;

    /// SQL column declaration
    fn sql_declaration(&self) -> &'static str;

    /// Convert a value into its column text
    fn encode(&self, value: &Self::Value) -> String;

    /// Convert column contents back into a value
    ///
    /// # Errors
    /// - `InvalidArgument` for non-text column values
    /// - `ConversionFailed` for text outside the supported catalog
    fn decode(&self, value: ColumnValue<'_>) -> CodecResult<Self::Value>;

    /// Extract text from a column value, rejecting every other column type
    fn expect_text<'v>(&self, value: ColumnValue<'v>, subject: &str) -> CodecResult<&'v str> {
        match value {
            ColumnValue::Text(text) => Ok(text),
            other => {
                tracing::debug!(
                    column_type = self.name(),
                    given = other.type_name(),
                    "Rejected non-text column value"
                );
                Err(CodecError::InvalidArgument(format!(
                    "{} must be string, \"{}\" given.",
                    subject,
                    other.type_name()
                )))
            },
        }
    }

    /// Error for text that names no supported value
    fn conversion_failed(&self, value: &str) -> CodecError {
        tracing::debug!(column_type = self.name(), value, "Unsupported column value");
        CodecError::ConversionFailed {
            value: value.to_string(),
            type_name: self.name(),
        }
    }
}
