// ============================================================================
// Nominal Value
// Exact fixed-point amount held as an integer count of subunits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest supported number of decimal places (10^18 still fits in an i64).
pub const MAX_PRECISION: u8 = 18;

// ============================================================================
// Scale
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Number of subunits per main unit.
///
/// Always a power of ten, so it can be described either by its `fraction`
/// (100 for cents) or by its `precision` in decimal places (2 for cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scale(u8);

impl Scale {
    /// Whole units only (fraction 1).
    pub const UNITS: Self = Self(0);

    /// Hundredths (fraction 100).
    pub const HUNDREDTHS: Self = Self(2);

    /// Create from a number of decimal places.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` above [`MAX_PRECISION`].
    pub fn from_precision(precision: u8) -> NumericResult<Self> {
        if precision > MAX_PRECISION {
            return Err(NumericError::PrecisionOutOfRange(precision));
        }
        Ok(Self(precision))
    }

    /// Create from a subunit count such as 100 (cents) or 1 (no subunit).
    ///
    /// # Errors
    /// Returns `InvalidScale` unless `fraction` is a power of ten.
    pub fn from_fraction(fraction: i64) -> NumericResult<Self> {
        (0..=MAX_PRECISION)
            .find(|&precision| pow10(precision) == fraction)
            .map(Self)
            .ok_or(NumericError::InvalidScale(fraction))
    }

    /// Decimal places kept in the main unit.
    #[inline]
    pub const fn precision(self) -> u8 {
        self.0
    }

    /// Subunits per main unit (10^precision).
    #[inline]
    pub const fn fraction(self) -> i64 {
        pow10(self.0)
    }
}

// ============================================================================
// Nominal Value
// ============================================================================

/// Fixed-point amount tied to a [`Scale`].
///
/// The integer `sub_value` is the only stored amount. The main-unit value is
/// always derived as `sub_value / fraction`, so the two can never drift apart.
/// Ordering uses the subunit count alone; equality additionally requires the
/// derived main values to match, which keeps values of different scales apart.
///
/// # Example
/// ```
/// use money_measure::numeric::{NominalValue, Scale};
/// use rust_decimal::{Decimal, RoundingStrategy};
///
/// let value = NominalValue::from_decimal(
///     Decimal::new(12345, 3), // 12.345
///     Scale::HUNDREDTHS,
///     RoundingStrategy::MidpointAwayFromZero,
/// )?;
/// assert_eq!(value.sub_value(), 1235);
/// assert_eq!(value.to_string(), "12.35");
/// # Ok::<(), money_measure::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
pub struct NominalValue {
    sub_value: i64,
    scale: Scale,
}

impl NominalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an exact subunit count.
    #[inline]
    pub const fn from_sub(sub_value: i64, scale: Scale) -> Self {
        Self { sub_value, scale }
    }

    /// Zero in the given scale.
    #[inline]
    pub const fn zero(scale: Scale) -> Self {
        Self::from_sub(0, scale)
    }

    /// Create from a main-unit decimal.
    ///
    /// The value is first rounded to the scale's precision with `strategy`,
    /// then converted into subunits.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the subunit count exceeds i64.
    pub fn from_decimal(
        value: Decimal,
        scale: Scale,
        strategy: RoundingStrategy,
    ) -> NumericResult<Self> {
        let overflow = || out_of_range(value.is_sign_positive());
        let rounded = value.round_dp_with_strategy(u32::from(scale.precision()), strategy);
        let scaled = rounded
            .checked_mul(Decimal::from(scale.fraction()))
            .ok_or_else(overflow)?;
        let sub_value = scaled.to_i64().ok_or_else(overflow)?;

        Ok(Self::from_sub(sub_value, scale))
    }

    /// Create from a main-unit float.
    ///
    /// The float is converted to a decimal with its excess binary digits
    /// dropped before rounding, so `12.33` becomes exactly 1233 cents.
    ///
    /// # Errors
    /// - `NotFinite` for NaN or infinity
    /// - `Overflow` / `Underflow` if the value is too large to represent
    pub fn from_f64(value: f64, scale: Scale, strategy: RoundingStrategy) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        let decimal = Decimal::from_f64(value).ok_or_else(|| out_of_range(value > 0.0))?;
        Self::from_decimal(decimal, scale, strategy)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Amount in subunits.
    #[inline]
    pub const fn sub_value(self) -> i64 {
        self.sub_value
    }

    #[inline]
    pub const fn scale(self) -> Scale {
        self.scale
    }

    /// Exact amount in main units, derived from the subunit count.
    #[inline]
    pub fn main_value(self) -> Decimal {
        Decimal::new(self.sub_value, u32::from(self.scale.precision()))
    }

    /// Amount in main units as a float. Display only, never compare on it.
    #[inline]
    pub fn main_value_f64(self) -> f64 {
        self.sub_value as f64 / self.scale.fraction() as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.sub_value == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.sub_value > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.sub_value < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    fn ensure_same_scale(self, rhs: Self) -> NumericResult<()> {
        if self.scale == rhs.scale {
            Ok(())
        } else {
            Err(NumericError::ScaleMismatch {
                left: self.scale.precision(),
                right: rhs.scale.precision(),
            })
        }
    }

    /// Checked addition of subunit counts.
    ///
    /// # Errors
    /// `ScaleMismatch`, `Overflow` or `Underflow`.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_same_scale(rhs)?;
        self.sub_value
            .checked_add(rhs.sub_value)
            .map(|sub| Self::from_sub(sub, self.scale))
            .ok_or_else(|| out_of_range(rhs.sub_value > 0))
    }

    /// Checked subtraction of subunit counts.
    ///
    /// # Errors
    /// `ScaleMismatch`, `Overflow` or `Underflow`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.ensure_same_scale(rhs)?;
        self.sub_value
            .checked_sub(rhs.sub_value)
            .map(|sub| Self::from_sub(sub, self.scale))
            .ok_or_else(|| out_of_range(rhs.sub_value < 0))
    }

    /// Multiply by a real factor, rounding half away from zero to a whole
    /// subunit. Non-integer factors may lose sub-subunit precision.
    ///
    /// # Errors
    /// `NotFinite`, `Overflow` or `Underflow`.
    pub fn checked_mul(self, factor: f64) -> NumericResult<Self> {
        round_to_sub(self.sub_value as f64 * factor).map(|sub| Self::from_sub(sub, self.scale))
    }

    /// Divide by a real divisor, rounding half away from zero to a whole
    /// subunit.
    ///
    /// # Errors
    /// `DivisionByZero`, `NotFinite`, `Overflow` or `Underflow`.
    pub fn checked_div(self, divisor: f64) -> NumericResult<Self> {
        if divisor == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        round_to_sub(self.sub_value as f64 / divisor).map(|sub| Self::from_sub(sub, self.scale))
    }

    /// Absolute value.
    ///
    /// # Errors
    /// `Overflow` for `i64::MIN` subunits.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        self.sub_value
            .checked_abs()
            .map(|sub| Self::from_sub(sub, self.scale))
            .ok_or(NumericError::Overflow)
    }

    /// Negation.
    ///
    /// # Errors
    /// `Overflow` for `i64::MIN` subunits.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.sub_value
            .checked_neg()
            .map(|sub| Self::from_sub(sub, self.scale))
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Three-way comparison on the subunit count.
    #[inline]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.sub_value.cmp(&other.sub_value)
    }
}

fn out_of_range(positive: bool) -> NumericError {
    if positive {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    }
}

/// Round a float subunit amount half away from zero into an i64.
fn round_to_sub(value: f64) -> NumericResult<i64> {
    if !value.is_finite() {
        return Err(NumericError::NotFinite);
    }
    let rounded = value.round();
    // i64::MAX is not representable as f64; its nearest float is 2^63.
    if rounded >= i64::MAX as f64 {
        Err(NumericError::Overflow)
    } else if rounded < i64::MIN as f64 {
        Err(NumericError::Underflow)
    } else {
        Ok(rounded as i64)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for NominalValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.sub_value == other.sub_value && self.main_value() == other.main_value()
    }
}

impl Eq for NominalValue {}

impl Hash for NominalValue {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sub_value.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for NominalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NominalValue({}, sub={})", self, self.sub_value)
    }
}

impl fmt::Display for NominalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.scale.fraction();
        let int_part = self.sub_value / fraction;
        let frac_part = (self.sub_value % fraction).unsigned_abs();
        let width = self.scale.precision() as usize;

        if width == 0 {
            write!(f, "{}", int_part)
        } else if self.sub_value < 0 && int_part == 0 {
            // Handle -0.xx case
            write!(f, "-0.{:0>width$}", frac_part, width = width)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = width)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

    fn tenths(sub: i64) -> NominalValue {
        NominalValue::from_sub(sub, Scale::from_fraction(10).unwrap())
    }

    #[test]
    fn test_scale_from_fraction() {
        assert_eq!(Scale::from_fraction(1).unwrap(), Scale::UNITS);
        assert_eq!(Scale::from_fraction(100).unwrap(), Scale::HUNDREDTHS);
        assert_eq!(Scale::from_fraction(1000).unwrap().precision(), 3);
        assert_eq!(Scale::from_fraction(4), Err(NumericError::InvalidScale(4)));
        assert_eq!(Scale::from_fraction(0), Err(NumericError::InvalidScale(0)));
        assert_eq!(Scale::from_fraction(-10), Err(NumericError::InvalidScale(-10)));
    }

    #[test]
    fn test_scale_from_precision() {
        assert_eq!(Scale::from_precision(2).unwrap().fraction(), 100);
        assert_eq!(
            Scale::from_precision(18).unwrap().fraction(),
            1_000_000_000_000_000_000
        );
        assert_eq!(
            Scale::from_precision(19),
            Err(NumericError::PrecisionOutOfRange(19))
        );
    }

    #[test]
    fn test_main_value_derived_from_sub() {
        for (fraction, main) in [
            (1, dec!(1234)),
            (10, dec!(123.4)),
            (100, dec!(12.34)),
            (1000, dec!(1.234)),
        ] {
            let value = NominalValue::from_sub(1234, Scale::from_fraction(fraction).unwrap());
            assert_eq!(value.sub_value(), 1234);
            assert_eq!(value.main_value(), main);
        }

        assert_eq!(tenths(1234).main_value_f64(), 123.4);
    }

    #[test]
    fn test_equality() {
        assert_eq!(tenths(1234), tenths(1234));
        assert_ne!(tenths(1234), tenths(1467));

        // Same subunits, different main value
        let hundredths = NominalValue::from_sub(1234, Scale::HUNDREDTHS);
        assert_ne!(tenths(1234), hundredths);
    }

    #[test]
    fn test_compare() {
        assert_eq!(tenths(1234).compare(&tenths(1467)), Ordering::Less);
        assert_eq!(tenths(1234).compare(&tenths(1234)), Ordering::Equal);
        assert_eq!(tenths(1234).compare(&tenths(800)), Ordering::Greater);
    }

    #[test]
    fn test_from_decimal_rounds_half_away_from_zero() {
        let x = NominalValue::from_decimal(dec!(12.345), Scale::HUNDREDTHS, HALF_UP).unwrap();
        assert_eq!(x.sub_value(), 1235);

        let y = NominalValue::from_decimal(dec!(-12.345), Scale::HUNDREDTHS, HALF_UP).unwrap();
        assert_eq!(y.sub_value(), -1235);
    }

    #[test]
    fn test_from_decimal_truncates_toward_zero() {
        let x = NominalValue::from_decimal(dec!(2.9), Scale::UNITS, RoundingStrategy::ToZero)
            .unwrap();
        assert_eq!(x.sub_value(), 2);
    }

    #[test]
    fn test_from_decimal_overflow() {
        let result = NominalValue::from_decimal(dec!(100000000000000000000), Scale::HUNDREDTHS, HALF_UP);
        assert_eq!(result, Err(NumericError::Overflow));

        let result = NominalValue::from_decimal(dec!(-100000000000000000000), Scale::HUNDREDTHS, HALF_UP);
        assert_eq!(result, Err(NumericError::Underflow));
    }

    #[test]
    fn test_from_f64() {
        let x = NominalValue::from_f64(12.33, Scale::HUNDREDTHS, HALF_UP).unwrap();
        assert_eq!(x.sub_value(), 1233);

        let nan = NominalValue::from_f64(f64::NAN, Scale::HUNDREDTHS, HALF_UP);
        assert_eq!(nan, Err(NumericError::NotFinite));

        let inf = NominalValue::from_f64(f64::NEG_INFINITY, Scale::HUNDREDTHS, HALF_UP);
        assert_eq!(inf, Err(NumericError::NotFinite));
    }

    #[test]
    fn test_checked_add_and_sub() {
        let a = NominalValue::from_sub(1233, Scale::HUNDREDTHS);
        let b = NominalValue::from_sub(518, Scale::HUNDREDTHS);

        assert_eq!(a.checked_add(b).unwrap().sub_value(), 1751);
        assert_eq!(a.checked_sub(b).unwrap().sub_value(), 715);
        assert_eq!(b.checked_sub(a).unwrap().sub_value(), -715);

        let max = NominalValue::from_sub(i64::MAX, Scale::HUNDREDTHS);
        let one = NominalValue::from_sub(1, Scale::HUNDREDTHS);
        assert_eq!(max.checked_add(one), Err(NumericError::Overflow));

        let min = NominalValue::from_sub(i64::MIN, Scale::HUNDREDTHS);
        assert_eq!(min.checked_sub(one), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_add_scale_mismatch() {
        let a = NominalValue::from_sub(1, Scale::HUNDREDTHS);
        let b = NominalValue::from_sub(1, Scale::UNITS);
        assert_eq!(
            a.checked_add(b),
            Err(NumericError::ScaleMismatch { left: 2, right: 0 })
        );
    }

    #[test]
    fn test_checked_mul_rounding() {
        let x = NominalValue::from_sub(1233, Scale::HUNDREDTHS);
        // 1479.6 -> 1480
        assert_eq!(x.checked_mul(1.2).unwrap().sub_value(), 1480);
        assert_eq!(x.checked_mul(-1.2).unwrap().sub_value(), -1480);
        // -2096.1 -> -2096
        assert_eq!(x.checked_mul(-1.7).unwrap().sub_value(), -2096);
        // exact half rounds away from zero
        let odd = NominalValue::from_sub(5, Scale::HUNDREDTHS);
        assert_eq!(odd.checked_mul(0.5).unwrap().sub_value(), 3);
        assert_eq!(odd.checked_mul(-0.5).unwrap().sub_value(), -3);
    }

    #[test]
    fn test_checked_mul_invalid() {
        let x = NominalValue::from_sub(1233, Scale::HUNDREDTHS);
        assert_eq!(x.checked_mul(f64::NAN), Err(NumericError::NotFinite));
        assert_eq!(x.checked_mul(1e300), Err(NumericError::Overflow));
        assert_eq!(x.checked_mul(-1e300), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_div() {
        let x = NominalValue::from_sub(1233, Scale::HUNDREDTHS);
        assert_eq!(x.checked_div(1.2).unwrap().sub_value(), 1028);
        assert_eq!(x.checked_div(-3.98).unwrap().sub_value(), -310);
        assert_eq!(x.checked_div(0.0), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_abs_and_neg() {
        let x = NominalValue::from_sub(-100, Scale::HUNDREDTHS);
        assert_eq!(x.checked_abs().unwrap().sub_value(), 100);
        assert_eq!(x.checked_neg().unwrap().sub_value(), 100);

        let min = NominalValue::from_sub(i64::MIN, Scale::HUNDREDTHS);
        assert_eq!(min.checked_abs(), Err(NumericError::Overflow));
        assert_eq!(min.checked_neg(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_sign_checks() {
        let zero = NominalValue::zero(Scale::HUNDREDTHS);
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(NominalValue::from_sub(1234, Scale::HUNDREDTHS).to_string(), "12.34");
        assert_eq!(NominalValue::from_sub(-5, Scale::HUNDREDTHS).to_string(), "-0.05");
        assert_eq!(NominalValue::from_sub(-1480, Scale::HUNDREDTHS).to_string(), "-14.80");
        assert_eq!(NominalValue::from_sub(42, Scale::UNITS).to_string(), "42");
        assert_eq!(
            format!("{:?}", NominalValue::from_sub(1234, Scale::HUNDREDTHS)),
            "NominalValue(12.34, sub=1234)"
        );
    }
}
