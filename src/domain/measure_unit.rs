// ============================================================================
// Measure Unit Registry
// Closed catalog of physical units a Quantity can be expressed in
// ============================================================================

use super::unit::{UnitError, UnitKind, UnitResult};
use crate::numeric::Scale;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported measure unit with the number of decimals a quantity keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum MeasureUnit {
    Piece,
    Gram,
    Kilogram,
    Liter,
    Mililiter,
    Meter,
    Milimeter,
}

impl MeasureUnit {
    /// Every supported unit, in lookup order
    pub const ALL: [MeasureUnit; 7] = [
        MeasureUnit::Piece,
        MeasureUnit::Gram,
        MeasureUnit::Kilogram,
        MeasureUnit::Liter,
        MeasureUnit::Mililiter,
        MeasureUnit::Meter,
        MeasureUnit::Milimeter,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            MeasureUnit::Piece => "pc",
            MeasureUnit::Gram => "g",
            MeasureUnit::Kilogram => "kg",
            MeasureUnit::Liter => "l",
            MeasureUnit::Mililiter => "ml",
            MeasureUnit::Meter => "m",
            MeasureUnit::Milimeter => "mm",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MeasureUnit::Piece => "piece",
            MeasureUnit::Gram => "gram",
            MeasureUnit::Kilogram => "kilogram",
            MeasureUnit::Liter => "liter",
            MeasureUnit::Mililiter => "mililiter",
            MeasureUnit::Meter => "meter",
            MeasureUnit::Milimeter => "milimeter",
        }
    }

    /// Decimal places kept in a quantity amount.
    pub const fn scale(self) -> Scale {
        match self {
            MeasureUnit::Piece
            | MeasureUnit::Gram
            | MeasureUnit::Mililiter
            | MeasureUnit::Milimeter => Scale::UNITS,
            MeasureUnit::Kilogram | MeasureUnit::Liter | MeasureUnit::Meter => Scale::HUNDREDTHS,
        }
    }

    #[inline]
    pub const fn precision(self) -> u8 {
        self.scale().precision()
    }

    /// Look up a unit by its exact symbol.
    ///
    /// # Errors
    /// Returns `UnsupportedUnit` for symbols outside the catalog.
    pub fn from_symbol(symbol: &str) -> UnitResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| UnitError::UnsupportedUnit {
                kind: UnitKind::MeasureUnit,
                code: symbol.to_string(),
            })
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MeasureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl TryFrom<String> for MeasureUnit {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&value)
    }
}

impl From<MeasureUnit> for String {
    fn from(unit: MeasureUnit) -> Self {
        unit.symbol().to_string()
    }
}
