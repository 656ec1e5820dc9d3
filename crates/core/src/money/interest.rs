//! Interest and tax.
//!
//! Every calculation runs in `Decimal` and rounds once, at the end.

use cambio_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::Money;
use crate::bank::conversion::{overflow, round_to_minor};

/// Compounding periods per year for monthly rates.
pub const MONTHLY: u32 = 12;

fn period_rate(rate_percent: Decimal, periods_per_year: u32) -> MoneyResult<Decimal> {
    if periods_per_year == 0 {
        return Err(MoneyError::InvalidArgument(
            "periods per year must be positive".to_string(),
        ));
    }
    rate_percent
        .checked_div(Decimal::ONE_HUNDRED * Decimal::from(periods_per_year))
        .ok_or_else(overflow)
}

/// `base ^ exponent` by repeated squaring; `None` on overflow.
fn checked_powu(mut base: Decimal, mut exponent: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

impl Money {
    /// Interest earned over `periods` compounding periods, principal excluded.
    ///
    /// Computes `cents * ((1 + rate / 100 / periods_per_year) ^ periods - 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cambio_core::{Currency, Money};
    /// use cambio_core::money::interest::MONTHLY;
    /// use rust_decimal_macros::dec;
    ///
    /// let principal = Money::new(1000_00, Currency::BRL);
    /// let interest = principal.compound_interest(dec!(12.99), 12, MONTHLY).unwrap();
    /// assert_eq!(interest.to_string(), "137.92");
    /// ```
    pub fn compound_interest(
        &self,
        rate_percent: Decimal,
        periods: u32,
        periods_per_year: u32,
    ) -> MoneyResult<Self> {
        let step = Decimal::ONE + period_rate(rate_percent, periods_per_year)?;
        let factor = checked_powu(step, periods).ok_or_else(overflow)?;

        let interest = Decimal::from(self.cents)
            .checked_mul(factor - Decimal::ONE)
            .ok_or_else(overflow)?;
        Ok(self.with_cents(round_to_minor(interest)?))
    }

    /// Interest without compounding: `cents * rate * periods / (100 * periods_per_year)`.
    pub fn simple_interest(
        &self,
        rate_percent: Decimal,
        periods: u32,
        periods_per_year: u32,
    ) -> MoneyResult<Self> {
        let rate = period_rate(rate_percent, periods_per_year)?;
        let interest = Decimal::from(self.cents)
            .checked_mul(rate)
            .and_then(|value| value.checked_mul(Decimal::from(periods)))
            .ok_or_else(overflow)?;
        Ok(self.with_cents(round_to_minor(interest)?))
    }

    /// Adds `tax_percent` percent, rounding the tax down. A negative
    /// percentage is a discount.
    pub fn add_tax(&self, tax_percent: Decimal) -> MoneyResult<Self> {
        let tax = Decimal::from(self.cents)
            .checked_mul(tax_percent)
            .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(overflow)?
            .floor();
        let tax = round_to_minor(tax)?;
        Ok(self.with_cents(self.cents.checked_add(tax).ok_or_else(overflow)?))
    }
}
