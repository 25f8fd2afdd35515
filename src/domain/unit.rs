// ============================================================================
// Unit Registry
// Single lookup over every currency code and measure unit symbol
// ============================================================================

use super::{Currency, MeasureUnit};
use crate::numeric::Scale;
use std::fmt;
use thiserror::Error;

/// Which part of the registry a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Currency,
    MeasureUnit,
    /// Either catalog
    Any,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Currency => write!(f, "currency code"),
            UnitKind::MeasureUnit => write!(f, "measure unit symbol"),
            UnitKind::Any => write!(f, "unit code"),
        }
    }
}

/// Registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unsupported {kind} \"{code}\"")]
    UnsupportedUnit { kind: UnitKind, code: String },
}

pub type UnitResult<T> = Result<T, UnitError>;

/// Any unit an amount can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Currency(Currency),
    Measure(MeasureUnit),
}

impl Unit {
    /// Resolve a currency code or measure unit symbol.
    ///
    /// Currency codes are upper-case and unit symbols lower-case, so the two
    /// catalogs never shadow each other.
    pub fn lookup(code: &str) -> UnitResult<Self> {
        Currency::from_code(code)
            .map(Unit::Currency)
            .or_else(|_| MeasureUnit::from_symbol(code).map(Unit::Measure))
            .map_err(|_| UnitError::UnsupportedUnit {
                kind: UnitKind::Any,
                code: code.to_string(),
            })
    }

    /// Currency code or unit symbol.
    pub const fn code(self) -> &'static str {
        match self {
            Unit::Currency(currency) => currency.code(),
            Unit::Measure(unit) => unit.symbol(),
        }
    }

    pub const fn scale(self) -> Scale {
        match self {
            Unit::Currency(currency) => currency.scale(),
            Unit::Measure(unit) => unit.scale(),
        }
    }

    pub const fn kind(self) -> UnitKind {
        match self {
            Unit::Currency(_) => UnitKind::Currency,
            Unit::Measure(_) => UnitKind::MeasureUnit,
        }
    }
}

impl From<Currency> for Unit {
    fn from(currency: Currency) -> Self {
        Unit::Currency(currency)
    }
}

impl From<MeasureUnit> for Unit {
    fn from(unit: MeasureUnit) -> Self {
        Unit::Measure(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_catalogs() {
        assert_eq!(Unit::lookup("EUR").unwrap(), Unit::Currency(Currency::Euro));
        assert_eq!(Unit::lookup("kg").unwrap(), Unit::Measure(MeasureUnit::Kilogram));
    }

    #[test]
    fn test_lookup_unsupported() {
        let err = Unit::lookup("XYZ").unwrap_err();
        assert_eq!(err.to_string(), "unsupported unit code \"XYZ\"");
    }

    #[test]
    fn test_catalogs_do_not_overlap() {
        for currency in Currency::ALL {
            assert!(MeasureUnit::from_symbol(currency.code()).is_err());
        }
        for unit in MeasureUnit::ALL {
            assert!(Currency::from_code(unit.symbol()).is_err());
        }
    }

    #[test]
    fn test_scale_and_kind() {
        let usd = Unit::from(Currency::UsDollar);
        assert_eq!(usd.scale().fraction(), 100);
        assert_eq!(usd.kind(), UnitKind::Currency);

        let pieces = Unit::from(MeasureUnit::Piece);
        assert_eq!(pieces.scale().fraction(), 1);
        assert_eq!(pieces.kind(), UnitKind::MeasureUnit);
        assert_eq!(pieces.to_string(), "pc");
    }
}
