//! Money helpers using rust_decimal for precision
//!
//! Amounts are carried as `Decimal` end to end. Rounding to two decimal
//! places happens only when a value is displayed or put on the wire, never
//! while accumulating.

use rust_decimal::prelude::*;

/// Two decimal places, half away from zero
pub const DECIMAL_PLACES: u32 = 2;

/// Currency prefix used on receipts and cart views (Peruvian sol)
pub const CURRENCY_SYMBOL: &str = "S/";

/// Line amount: `unit_price × quantity`, unrounded
#[inline]
pub fn line_amount(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

/// Round to two decimals and fix the scale at two, so that `45` becomes `45.00`
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);
    rounded
}

/// Format an amount with exactly two decimals (`"45.00"`)
pub fn format_amount(value: Decimal) -> String {
    round_money(value).to_string()
}

/// Format an amount for display (`"S/ 45.00"`)
pub fn format_currency(value: Decimal) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_amount(value))
}
