// ============================================================================
// Money Domain Model
// Fixed-point amount bound to a currency
// ============================================================================

use super::Currency;
use crate::numeric::{NominalValue, NumericError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Main-unit amounts are rounded half away from zero onto the subunit grid.
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Errors raised by money arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Operands are in different currencies
    #[error("Mathematical operations are allowed for only the same currency ({left} => {right}).")]
    MismatchCurrencies { left: Currency, right: Currency },

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

pub type MoneyResult<T> = Result<T, MoneyError>;

/// Amount of money in a single currency.
///
/// Stored as an integer count of the currency's subunits. Every operation
/// returns a new value; binary operations require both operands to share a
/// currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "record::MoneyRecord", into = "record::MoneyRecord")
)]
pub struct Money {
    nominal_value: NominalValue,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a main-unit amount, rounded to the currency's precision.
    ///
    /// # Errors
    /// `Numeric` if the amount is not finite or does not fit.
    pub fn of(amount: f64, currency: Currency) -> MoneyResult<Self> {
        let nominal_value = NominalValue::from_f64(amount, currency.scale(), ROUNDING)?;
        Ok(Self::new(nominal_value, currency))
    }

    /// Create from an exact main-unit decimal, rounded to the currency's
    /// precision.
    ///
    /// # Errors
    /// `Numeric` if the amount does not fit.
    pub fn of_decimal(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        let nominal_value = NominalValue::from_decimal(amount, currency.scale(), ROUNDING)?;
        Ok(Self::new(nominal_value, currency))
    }

    /// Create from an exact number of subunits (e.g. cents).
    #[inline]
    pub const fn of_sub(amount: i64, currency: Currency) -> Self {
        Self::new(NominalValue::from_sub(amount, currency.scale()), currency)
    }

    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Self::of_sub(0, currency)
    }

    const fn new(nominal_value: NominalValue, currency: Currency) -> Self {
        Self {
            nominal_value,
            currency,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[inline]
    pub const fn nominal_value(&self) -> NominalValue {
        self.nominal_value
    }

    #[inline]
    pub const fn amount_in_sub_unit(&self) -> i64 {
        self.nominal_value.sub_value()
    }

    /// Exact main-unit amount derived from the subunit count.
    #[inline]
    pub fn amount_in_main_unit(&self) -> Decimal {
        self.nominal_value.main_value()
    }

    #[inline]
    pub fn amount_in_main_unit_f64(&self) -> f64 {
        self.nominal_value.main_value_f64()
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Whether arithmetic between the two values is defined.
    #[inline]
    pub fn comparable(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    fn ensure_comparable(&self, other: &Self) -> MoneyResult<()> {
        if self.comparable(other) {
            return Ok(());
        }
        tracing::debug!(
            left = %self.currency,
            right = %other.currency,
            "Rejected money operation across currencies"
        );
        Err(MoneyError::MismatchCurrencies {
            left: self.currency,
            right: other.currency,
        })
    }

    /// Three-way comparison on subunits.
    ///
    /// # Errors
    /// `MismatchCurrencies` when the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_comparable(other)?;
        Ok(self.nominal_value.compare(&other.nominal_value))
    }

    /// Strict equality; unlike `==`, a currency mismatch is an error.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_eq)
    }

    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    pub fn less_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_le)
    }

    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    pub fn greater_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_ge)
    }

    /// More than zero subunits.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.nominal_value.is_positive()
    }

    /// Not positive. Zero counts as negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        !self.is_positive()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// # Errors
    /// `MismatchCurrencies`, or `Numeric` on overflow.
    pub fn add(&self, addend: &Self) -> MoneyResult<Self> {
        self.ensure_comparable(addend)?;
        let sum = self.nominal_value.checked_add(addend.nominal_value)?;
        Ok(Self::new(sum, self.currency))
    }

    /// # Errors
    /// `MismatchCurrencies`, or `Numeric` on overflow.
    pub fn subtract(&self, subtrahend: &Self) -> MoneyResult<Self> {
        self.ensure_comparable(subtrahend)?;
        let difference = self.nominal_value.checked_sub(subtrahend.nominal_value)?;
        Ok(Self::new(difference, self.currency))
    }

    /// Scale by a real factor, rounding to the nearest subunit.
    pub fn multiply(&self, factor: f64) -> MoneyResult<Self> {
        let product = self.nominal_value.checked_mul(factor)?;
        Ok(Self::new(product, self.currency))
    }

    /// Divide by a real divisor, rounding to the nearest subunit.
    pub fn divide(&self, divisor: f64) -> MoneyResult<Self> {
        let quotient = self.nominal_value.checked_div(divisor)?;
        Ok(Self::new(quotient, self.currency))
    }

    pub fn absolute(&self) -> MoneyResult<Self> {
        Ok(Self::new(self.nominal_value.checked_abs()?, self.currency))
    }

    pub fn opposite(&self) -> MoneyResult<Self> {
        Ok(Self::new(self.nominal_value.checked_neg()?, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.nominal_value, self.currency)
    }
}

#[cfg(feature = "serde")]
mod record {
    use super::{Currency, Money};
    use serde::{Deserialize, Serialize};

    /// Wire form: subunit count plus currency code
    #[derive(Serialize, Deserialize)]
    pub struct MoneyRecord {
        amount: i64,
        currency: Currency,
    }

    impl From<MoneyRecord> for Money {
        fn from(record: MoneyRecord) -> Self {
            Money::of_sub(record.amount, record.currency)
        }
    }

    impl From<Money> for MoneyRecord {
        fn from(money: Money) -> Self {
            Self {
                amount: money.amount_in_sub_unit(),
                currency: money.currency(),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
