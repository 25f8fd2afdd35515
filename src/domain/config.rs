// ============================================================================
// Value Configuration
// Defaults applied when a caller does not name a currency
// ============================================================================

use super::Currency;
use std::env;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable holding the default currency code
pub const DEFAULT_CURRENCY_ENV: &str = "MONEY_DEFAULT_CURRENCY";

/// Library-wide defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValueConfig {
    /// Currency used by `Total::zero_from` (EUR unless configured)
    pub default_currency: Currency,
}

impl ValueConfig {
    pub fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }

    /// Builder method: Set the default currency
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_currency = match lookup(DEFAULT_CURRENCY_ENV) {
            Some(code) => Currency::from_code(code.trim()).map_err(|_| {
                ConfigError::InvalidValue {
                    key: DEFAULT_CURRENCY_ENV,
                    value: code,
                }
            })?,
            None => Currency::default(),
        };

        Ok(Self { default_currency })
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValueConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, ValueConfig::default());
        assert_eq!(config.default_currency, Currency::Euro);
    }

    #[test]
    fn test_reads_default_currency() {
        let config = ValueConfig::from_vars(|key| {
            (key == DEFAULT_CURRENCY_ENV).then(|| " USD ".to_string())
        })
        .unwrap();
        assert_eq!(config.default_currency, Currency::UsDollar);
    }

    #[test]
    fn test_rejects_unsupported_currency() {
        let err = ValueConfig::from_vars(|_| Some("GBP".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: DEFAULT_CURRENCY_ENV,
                value: "GBP".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for environment variable MONEY_DEFAULT_CURRENCY: \"GBP\""
        );
    }

    #[test]
    fn test_builder() {
        let config = ValueConfig::new(Currency::Euro).with_default_currency(Currency::JapaneseYen);
        assert_eq!(config.default_currency, Currency::JapaneseYen);
    }
}
