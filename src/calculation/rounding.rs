//! Rounding helpers.
//!
//! Monetary outputs are rounded half-up (midpoint away from zero) to two
//! decimal places. Intermediate values are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by monetary amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value half-up to the given number of decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("2.345").unwrap(), 2), Decimal::from_str("2.35").unwrap());
/// assert_eq!(round_half_up(Decimal::from_str("2.5").unwrap(), 0), Decimal::from_str("3").unwrap());
/// ```
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to two decimal places, half-up.
///
/// The result carries a scale of two so it renders as e.g. `1600.00`. An
/// amount above about 7.9e26 cannot hold two decimal places and gets the
/// largest scale it can hold instead.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(1600, 0)).to_string(), "1600.00");
/// assert_eq!(round_currency(Decimal::new(12345, 3)).to_string(), "12.35");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = round_half_up(amount, CURRENCY_DECIMAL_PLACES);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
