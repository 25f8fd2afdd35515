// ============================================================================
// Quantity Domain Model
// Strictly positive amount bound to a measure unit
// ============================================================================

use super::MeasureUnit;
use crate::numeric::{NominalValue, NumericError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by quantity construction and arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Amount is zero or negative after rounding to the unit's precision
    #[error("Quantity must be greater than zero ({amount} {unit} given).")]
    InvalidQuantity { amount: Decimal, unit: MeasureUnit },

    /// Operands are in different measure units
    #[error(
        "Mathematical operations are allowed for only the same measure unit ({left} != {right})."
    )]
    MismatchMeasureUnits {
        left: MeasureUnit,
        right: MeasureUnit,
    },

    /// Subtraction would leave nothing, or less than nothing
    #[error(
        "Subtracting a larger amount from a smaller one is not allowed ({minuend} - {subtrahend})."
    )]
    TooLargeQuantityToSubtract {
        minuend: Decimal,
        subtrahend: Decimal,
    },

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

pub type QuantityResult<T> = Result<T, QuantityError>;

/// Positive amount of something measured in a [`MeasureUnit`].
///
/// The amount is kept at the unit's precision: rounded half away from zero
/// for fractional units, truncated toward zero for whole-number units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "record::QuantityRecord", into = "record::QuantityRecord")
)]
pub struct Quantity {
    amount: NominalValue,
    measure_unit: MeasureUnit,
}

impl Quantity {
    // ========================================================================
    // Construction
    // ========================================================================

    /// # Errors
    /// - `InvalidQuantity` if the rounded amount is not above zero
    /// - `Numeric` if the amount is not finite or does not fit
    pub fn new(amount: f64, measure_unit: MeasureUnit) -> QuantityResult<Self> {
        let amount =
            NominalValue::from_f64(amount, measure_unit.scale(), Self::rounding(measure_unit))?;
        Self::from_nominal(amount, measure_unit)
    }

    /// # Errors
    /// - `InvalidQuantity` if the rounded amount is not above zero
    /// - `Numeric` if the amount does not fit
    pub fn from_decimal(amount: Decimal, measure_unit: MeasureUnit) -> QuantityResult<Self> {
        let amount =
            NominalValue::from_decimal(amount, measure_unit.scale(), Self::rounding(measure_unit))?;
        Self::from_nominal(amount, measure_unit)
    }

    fn from_nominal(amount: NominalValue, measure_unit: MeasureUnit) -> QuantityResult<Self> {
        if !amount.is_positive() {
            tracing::debug!(amount = %amount, unit = %measure_unit, "Rejected non-positive quantity");
            return Err(QuantityError::InvalidQuantity {
                amount: amount.main_value().normalize(),
                unit: measure_unit,
            });
        }
        Ok(Self {
            amount,
            measure_unit,
        })
    }

    const fn rounding(measure_unit: MeasureUnit) -> RoundingStrategy {
        if measure_unit.precision() == 0 {
            RoundingStrategy::ToZero
        } else {
            RoundingStrategy::MidpointAwayFromZero
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Exact amount at the unit's precision.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.amount.main_value()
    }

    #[inline]
    pub fn amount_f64(&self) -> f64 {
        self.amount.main_value_f64()
    }

    #[inline]
    pub const fn nominal_value(&self) -> NominalValue {
        self.amount
    }

    #[inline]
    pub const fn measure_unit(&self) -> MeasureUnit {
        self.measure_unit
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    #[inline]
    pub fn comparable(&self, other: &Self) -> bool {
        self.measure_unit == other.measure_unit
    }

    fn ensure_comparable(&self, other: &Self) -> QuantityResult<()> {
        if self.comparable(other) {
            return Ok(());
        }
        tracing::debug!(
            left = %self.measure_unit,
            right = %other.measure_unit,
            "Rejected quantity operation across measure units"
        );
        Err(QuantityError::MismatchMeasureUnits {
            left: self.measure_unit,
            right: other.measure_unit,
        })
    }

    /// # Errors
    /// `MismatchMeasureUnits` when the units differ.
    pub fn compare(&self, other: &Self) -> QuantityResult<Ordering> {
        self.ensure_comparable(other)?;
        Ok(self.amount.compare(&other.amount))
    }

    pub fn equals(&self, other: &Self) -> QuantityResult<bool> {
        self.compare(other).map(Ordering::is_eq)
    }

    pub fn less_than(&self, other: &Self) -> QuantityResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn less_than_or_equal_to(&self, other: &Self) -> QuantityResult<bool> {
        self.compare(other).map(Ordering::is_le)
    }

    pub fn greater_than(&self, other: &Self) -> QuantityResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn greater_than_or_equal_to(&self, other: &Self) -> QuantityResult<bool> {
        self.compare(other).map(Ordering::is_ge)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// # Errors
    /// `MismatchMeasureUnits`, or `Numeric` on overflow.
    pub fn increase(&self, addend: &Self) -> QuantityResult<Self> {
        self.ensure_comparable(addend)?;
        let sum = self.amount.checked_add(addend.amount)?;
        Ok(Self {
            amount: sum,
            measure_unit: self.measure_unit,
        })
    }

    /// Remove `subtrahend`, which must be strictly smaller.
    ///
    /// # Errors
    /// `MismatchMeasureUnits` first, then `TooLargeQuantityToSubtract`.
    pub fn decrease(&self, subtrahend: &Self) -> QuantityResult<Self> {
        if self.less_than_or_equal_to(subtrahend)? {
            tracing::debug!(
                minuend = %self,
                subtrahend = %subtrahend,
                "Rejected quantity subtraction below zero"
            );
            return Err(QuantityError::TooLargeQuantityToSubtract {
                minuend: self.amount().normalize(),
                subtrahend: subtrahend.amount().normalize(),
            });
        }
        let difference = self.amount.checked_sub(subtrahend.amount)?;
        Ok(Self {
            amount: difference,
            measure_unit: self.measure_unit,
        })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.measure_unit)
    }
}

#[cfg(feature = "serde")]
mod record {
    use super::{MeasureUnit, Quantity, QuantityError};
    use crate::numeric::NominalValue;
    use serde::{Deserialize, Serialize};

    /// Wire form: subunit count plus unit symbol
    #[derive(Serialize, Deserialize)]
    pub struct QuantityRecord {
        amount: i64,
        unit: MeasureUnit,
    }

    impl TryFrom<QuantityRecord> for Quantity {
        type Error = QuantityError;

        fn try_from(record: QuantityRecord) -> Result<Self, Self::Error> {
            let amount = NominalValue::from_sub(record.amount, record.unit.scale());
            Quantity::from_nominal(amount, record.unit)
        }
    }

    impl From<Quantity> for QuantityRecord {
        fn from(quantity: Quantity) -> Self {
            Self {
                amount: quantity.nominal_value().sub_value(),
                unit: quantity.measure_unit(),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
