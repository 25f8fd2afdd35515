// ============================================================================
// Total
// Running signed sum of money in one currency
// ============================================================================

use super::config::ValueConfig;
use super::money::{Money, MoneyResult};
use super::Currency;
use std::fmt;

/// Immutable accumulator over [`Money`] values.
///
/// Each step returns a new `Total`; the previous one is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Total {
    value: Money,
}

impl Total {
    /// Zero in `currency`, or in the default currency when `None`.
    pub fn zero(currency: Option<Currency>) -> Self {
        Self {
            value: Money::zero(currency.unwrap_or_default()),
        }
    }

    /// Zero in the configured default currency.
    pub fn zero_from(config: &ValueConfig) -> Self {
        Self::zero(Some(config.default_currency))
    }

    /// Fold a sequence of money into a total, stopping at the first
    /// currency mismatch.
    pub fn sum<'a, I>(currency: Currency, monies: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        monies
            .into_iter()
            .try_fold(Self::zero(Some(currency)), |total, money| total.increase(money))
    }

    /// # Errors
    /// `MismatchCurrencies` if `addend` is in another currency.
    pub fn increase(&self, addend: &Money) -> MoneyResult<Self> {
        let value = self.value.add(addend)?;
        tracing::trace!(addend = %addend, total = %value, "Increased total");
        Ok(Self { value })
    }

    /// # Errors
    /// `MismatchCurrencies` if `subtrahend` is in another currency.
    pub fn decrease(&self, subtrahend: &Money) -> MoneyResult<Self> {
        let value = self.value.subtract(subtrahend)?;
        tracing::trace!(subtrahend = %subtrahend, total = %value, "Decreased total");
        Ok(Self { value })
    }

    #[inline]
    pub const fn value(&self) -> Money {
        self.value
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.value.currency()
    }
}

impl Default for Total {
    fn default() -> Self {
        Self::zero(None)
    }
}

impl From<Total> for Money {
    fn from(total: Total) -> Self {
        total.value
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::MoneyError;

    fn eur(amount: f64) -> Money {
        Money::of(amount, Currency::Euro).unwrap()
    }

    #[test]
    fn test_zero_defaults_to_euro() {
        let total = Total::zero(None);
        assert_eq!(total.currency(), Currency::Euro);
        assert_eq!(total.value(), Money::zero(Currency::Euro));
        assert_eq!(Total::default(), total);
    }

    #[test]
    fn test_zero_in_given_currency() {
        let total = Total::zero(Some(Currency::UsDollar));
        assert_eq!(total.currency(), Currency::UsDollar);
    }

    #[test]
    fn test_zero_from_config() {
        let config = ValueConfig::default().with_default_currency(Currency::CzechKoruna);
        assert_eq!(Total::zero_from(&config).currency(), Currency::CzechKoruna);
    }

    #[test]
    fn test_increase_then_decrease_returns_to_zero() {
        let zero = Total::zero(Some(Currency::Euro));
        let total = zero
            .increase(&eur(1.0))
            .unwrap()
            .decrease(&eur(1.0))
            .unwrap();
        assert_eq!(total, zero);
    }

    #[test]
    fn test_total_can_go_negative() {
        let total = Total::default().decrease(&eur(2.5)).unwrap();
        assert_eq!(total.value(), eur(-2.5));
    }

    #[test]
    fn test_previous_total_is_untouched() {
        let first = Total::default().increase(&eur(3.0)).unwrap();
        let second = first.increase(&eur(4.0)).unwrap();
        assert_eq!(first.value(), eur(3.0));
        assert_eq!(second.value(), eur(7.0));
    }

    #[test]
    fn test_mismatched_currency_fails() {
        let usd = Money::of(1.0, Currency::UsDollar).unwrap();
        assert_eq!(
            Total::default().increase(&usd),
            Err(MoneyError::MismatchCurrencies {
                left: Currency::Euro,
                right: Currency::UsDollar,
            })
        );
        assert!(Total::default().decrease(&usd).is_err());
    }

    #[test]
    fn test_sum() {
        let monies = [eur(12.33), eur(5.18), eur(-0.51)];
        let total = Total::sum(Currency::Euro, &monies).unwrap();
        assert_eq!(Money::from(total), eur(17.0));

        let mixed = [eur(1.0), Money::of(1.0, Currency::UsDollar).unwrap()];
        assert!(Total::sum(Currency::Euro, &mixed).is_err());
    }

    #[test]
    fn test_display() {
        let total = Total::zero(Some(Currency::UsDollar));
        assert_eq!(total.to_string(), "0.00 USD");
    }
}
