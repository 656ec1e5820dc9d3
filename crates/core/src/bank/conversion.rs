//! Minor-unit rounding and rate conversion.
//!
//! CRITICAL: Rounding strategy for money values:
//! - Every fractional minor-unit amount is rounded exactly once
//! - Ties round away from zero (1.5 -> 2, -1.5 -> -2)
//! - Intermediate values stay in `Decimal`, never `f64`

use cambio_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

/// Rounding applied whenever a fractional amount becomes whole minor units.
pub const ROUNDING_STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

pub(crate) fn overflow() -> MoneyError {
    MoneyError::InvalidArgument("amount out of range".to_string())
}

/// Rounds a fractional minor-unit amount to whole minor units.
pub fn round_to_minor(value: Decimal) -> MoneyResult<i64> {
    value
        .round_dp_with_strategy(0, ROUNDING_STRATEGY)
        .to_i64()
        .ok_or_else(overflow)
}

/// Converts `cents` quoted at `from_rate` into units quoted at `to_rate`.
///
/// Both rates are "units per one unit of the same base"; the base acts as
/// pivot: `round(cents / from_rate * to_rate)`.
pub fn convert_cents(cents: i64, from_rate: Decimal, to_rate: Decimal) -> MoneyResult<i64> {
    let converted = Decimal::from(cents)
        .checked_div(from_rate)
        .and_then(|pivot| pivot.checked_mul(to_rate))
        .ok_or_else(overflow)?;
    round_to_minor(converted)
}
