// ============================================================================
// Money & Measure Library
// Exact fixed-point money and measured quantity value objects
// ============================================================================

//! # Money & Measure
//!
//! Immutable value objects for monetary amounts and physical quantities.
//!
//! ## Features
//!
//! - **Exact fixed-point storage**: amounts are integer subunit counts, main-unit
//!   values are derived on demand
//! - **Closed unit registry**: currencies and measure units are enums with
//!   static lookup tables
//! - **Checked arithmetic**: mixing currencies or measure units is an error,
//!   never a silent conversion
//! - **Column codecs** for persisting units as three character strings
//!
//! ## Example
//!
//! ```rust
//! use money_measure::prelude::*;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let price = Money::of(12.33, Currency::Euro)?;
//! let shipping = Money::of(5.18, Currency::Euro)?;
//! assert_eq!(price.add(&shipping)?.amount_in_main_unit(), Decimal::new(1751, 2));
//!
//! // Currencies never mix
//! let dollars = Money::of(1.0, Currency::UsDollar)?;
//! assert!(price.add(&dollars).is_err());
//!
//! // Quantities stay strictly positive
//! let stock = Quantity::new(1.0, MeasureUnit::Piece)?;
//! let order = Quantity::new(2.0, MeasureUnit::Piece)?;
//! assert!(stock.decrease(&order).is_err());
//!
//! let total = Total::zero(Some(Currency::Euro))
//!     .increase(&price)?
//!     .decrease(&shipping)?;
//! println!("Total: {}", total);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod persistence;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConfigError, Currency, MeasureUnit, Money, MoneyError, Quantity, QuantityError, Total,
        Unit, UnitError, ValueConfig,
    };
    pub use crate::interfaces::{CodecError, ColumnType, ColumnValue};
    pub use crate::numeric::{NominalValue, NumericError, Scale};
    pub use crate::persistence::{CurrencyType, MeasureUnitType};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_end_to_end_invoice() {
        // Stock is tracked as a quantity, prices as money
        let stock = Quantity::new(10.0, MeasureUnit::Kilogram).unwrap();
        let sold = Quantity::new(2.5, MeasureUnit::Kilogram).unwrap();
        let remaining = stock.decrease(&sold).unwrap();
        assert_eq!(remaining.amount(), dec!(7.50));

        let unit_price = Money::of(3.99, Currency::Euro).unwrap();
        let line = unit_price.multiply(sold.amount_f64()).unwrap();
        assert_eq!(line.amount_in_main_unit(), dec!(9.98));

        let discount = line.divide(10.0).unwrap().opposite().unwrap();
        let total = Total::default()
            .increase(&line)
            .unwrap()
            .increase(&discount)
            .unwrap();
        assert_eq!(total.value().amount_in_main_unit(), dec!(8.98));
    }

    #[test]
    fn test_units_survive_column_round_trip() {
        let money = Money::of(42.0, Currency::UsDollar).unwrap();
        let column = CurrencyType.encode(&money.currency());
        let currency = CurrencyType.decode(ColumnValue::Text(&column)).unwrap();
        let restored = Money::of_sub(money.amount_in_sub_unit(), currency);
        assert_eq!(restored, money);

        let quantity = Quantity::new(1.25, MeasureUnit::Liter).unwrap();
        let column = MeasureUnitType.encode(&quantity.measure_unit());
        let unit = MeasureUnitType.decode(ColumnValue::Text(&column)).unwrap();
        assert_eq!(unit, MeasureUnit::Liter);
    }

    #[test]
    fn test_registry_lookup_feeds_constructors() {
        let currency = match Unit::lookup("USD").unwrap() {
            Unit::Currency(currency) => currency,
            Unit::Measure(_) => unreachable!("USD is a currency"),
        };
        let money = Money::of(1.5, currency).unwrap();
        assert_eq!(money.to_string(), "1.50 USD");
    }
}
