// ============================================================================
// Currency Registry
// Closed catalog of supported currencies and their subunits
// ============================================================================

use super::unit::{UnitError, UnitKind, UnitResult};
use crate::numeric::Scale;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Main denomination of a currency (e.g. EUR, €)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MainUnit {
    /// ISO-like three letter code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
}

/// Smallest denomination of a currency (e.g. cent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubUnit {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Subunits per main unit
    pub scale: Scale,
}

impl SubUnit {
    /// Subunits per main unit (100 for cents).
    #[inline]
    pub const fn fraction(&self) -> i64 {
        self.scale.fraction()
    }

    /// Decimal places of the main unit (log10 of the fraction).
    #[inline]
    pub const fn precision(&self) -> u8 {
        self.scale.precision()
    }
}

/// Supported currency.
///
/// Two currencies are equal iff they are the same variant, which implies the
/// same code and the same subunit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Currency {
    /// Euro, the default currency
    #[default]
    Euro,
    /// United States dollar
    UsDollar,
    /// Czech koruna
    CzechKoruna,
    /// Japanese yen (no subunit in circulation)
    JapaneseYen,
}

impl Currency {
    /// Every supported currency, in lookup order
    pub const ALL: [Currency; 4] = [
        Currency::Euro,
        Currency::UsDollar,
        Currency::CzechKoruna,
        Currency::JapaneseYen,
    ];

    pub const fn main_unit(self) -> MainUnit {
        match self {
            Currency::Euro => MainUnit {
                code: "EUR",
                symbol: "€",
            },
            Currency::UsDollar => MainUnit {
                code: "USD",
                symbol: "$",
            },
            Currency::CzechKoruna => MainUnit {
                code: "CZK",
                symbol: "Kč",
            },
            Currency::JapaneseYen => MainUnit {
                code: "JPY",
                symbol: "¥",
            },
        }
    }

    pub const fn sub_unit(self) -> SubUnit {
        match self {
            Currency::Euro | Currency::UsDollar => SubUnit {
                name: "cent",
                symbol: "c",
                scale: Scale::HUNDREDTHS,
            },
            Currency::CzechKoruna => SubUnit {
                name: "haler",
                symbol: "h",
                scale: Scale::HUNDREDTHS,
            },
            Currency::JapaneseYen => SubUnit {
                name: "sen",
                symbol: "銭",
                scale: Scale::UNITS,
            },
        }
    }

    #[inline]
    pub const fn code(self) -> &'static str {
        self.main_unit().code
    }

    #[inline]
    pub const fn symbol(self) -> &'static str {
        self.main_unit().symbol
    }

    #[inline]
    pub const fn scale(self) -> Scale {
        self.sub_unit().scale
    }

    #[inline]
    pub const fn fraction(self) -> i64 {
        self.sub_unit().fraction()
    }

    #[inline]
    pub const fn precision(self) -> u8 {
        self.sub_unit().precision()
    }

    /// Look up a currency by its exact code.
    ///
    /// # Errors
    /// Returns `UnsupportedUnit` for codes outside the catalog.
    pub fn from_code(code: &str) -> UnitResult<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| UnitError::UnsupportedUnit {
                kind: UnitKind::Currency,
                code: code.to_string(),
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = UnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}
