// ============================================================================
// Domain Models Module
// Unit registry and the value objects bound to it
// ============================================================================

pub mod config;
pub mod currency;
pub mod measure_unit;
pub mod money;
pub mod quantity;
pub mod total;
pub mod unit;

pub use config::{ConfigError, ValueConfig, DEFAULT_CURRENCY_ENV};
pub use currency::{Currency, MainUnit, SubUnit};
pub use measure_unit::MeasureUnit;
pub use money::{Money, MoneyError, MoneyResult};
pub use quantity::{Quantity, QuantityError, QuantityResult};
pub use total::Total;
pub use unit::{Unit, UnitError, UnitKind, UnitResult};
