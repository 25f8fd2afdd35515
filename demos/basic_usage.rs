// ============================================================================
// Basic Usage Example
// ============================================================================

use money_measure::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    money_measure::utils::init_logging("money_measure=debug")?;

    println!("=== Money & Measure Example ===\n");

    let config = ValueConfig::from_env()?;
    println!("Default currency: {}\n", config.default_currency);

    // Prices
    let price = Money::of(12.33, Currency::Euro)?;
    let shipping = Money::of(5.18, Currency::Euro)?;
    println!("Price:            {}", price);
    println!("Shipping:         {}", shipping);
    println!("Price + shipping: {}", price.add(&shipping)?);
    println!("Price x 1.2:      {}", price.multiply(1.2)?);
    println!("Price / -3.98:    {}", price.divide(-3.98)?);
    println!("Opposite:         {}", price.opposite()?);

    // Mixing currencies is rejected
    let dollars = Money::of(10.0, Currency::UsDollar)?;
    match price.add(&dollars) {
        Ok(sum) => println!("Unexpected sum: {}", sum),
        Err(err) => println!("\nRejected: {}", err),
    }

    // Quantities
    println!("\n=== Quantities ===");
    let stock = Quantity::new(2.0, MeasureUnit::Meter)?;
    let cut = Quantity::new(0.75, MeasureUnit::Meter)?;
    println!("Stock:     {}", stock);
    println!("After cut: {}", stock.decrease(&cut)?);
    if let Err(err) = cut.decrease(&stock) {
        println!("Rejected:  {}", err);
    }

    // Running totals
    println!("\n=== Totals ===");
    let lines = [price, shipping, Money::of(-2.5, Currency::Euro)?];
    let total = Total::sum(Currency::Euro, &lines)?;
    println!("Invoice total: {}", total);
    let zero = Total::zero_from(&config);
    println!("Fresh total:   {}", zero);

    // Persisting units
    println!("\n=== Column Codecs ===");
    let column = CurrencyType.encode(&price.currency());
    println!(
        "{} column ({}): {:?} + amount {}",
        CurrencyType.name(),
        CurrencyType.sql_declaration(),
        column,
        price.amount_in_sub_unit()
    );
    let restored = Money::of_sub(
        price.amount_in_sub_unit(),
        CurrencyType.decode(ColumnValue::Text(&column))?,
    );
    println!("Restored: {}", restored);

    match MeasureUnitType.decode(ColumnValue::Integer(7)) {
        Ok(unit) => println!("Unexpected unit: {}", unit),
        Err(err) => println!("Rejected: {}", err),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
