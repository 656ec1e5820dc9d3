//! Money type with integer minor units and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` minor units (cents); anything fractional goes through
//! `Decimal` and is rounded once with [`ROUNDING_STRATEGY`].

pub mod arithmetic;
pub mod format;
pub mod installments;
pub mod interest;
pub mod parse;
pub mod storage;
pub mod wallet;

#[cfg(test)]
mod props;

use std::fmt;
use std::sync::Arc;

use cambio_shared::{Currency, DEFAULT_CURRENCY, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bank::conversion::{overflow, round_to_minor};
use crate::bank::{ExchangeBank, default_bank};

pub use crate::bank::ROUNDING_STRATEGY;
pub use arithmetic::Operand;
pub use format::FormatOptions;
pub use installments::RemainderPlacement;
pub use wallet::Wallet;

/// Represents an amount of money in a certain currency.
///
/// Values are immutable; every operation returns a new `Money`. Each value
/// carries the exchange bank it was built with, used whenever it takes part
/// in a cross-currency operation. Two values are equal when amount and
/// currency match, whatever their banks.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "storage::StoredMoney", from = "storage::StoredMoney")]
pub struct Money {
    cents: i64,
    currency: Currency,
    bank: Arc<dyn ExchangeBank>,
}

impl Money {
    /// Creates a new Money instance using the default bank.
    #[must_use]
    pub fn new(cents: i64, currency: Currency) -> Self {
        Self::with_bank(cents, currency, default_bank())
    }

    /// Creates a new Money instance bound to a specific bank.
    #[must_use]
    pub fn with_bank(cents: i64, currency: Currency, bank: Arc<dyn ExchangeBank>) -> Self {
        Self {
            cents,
            currency,
            bank,
        }
    }

    /// Creates Money from a possibly fractional amount of minor units.
    ///
    /// `1.49` becomes 1 cent, `1.5` becomes 2 and `-1.5` becomes -2.
    pub fn from_decimal(cents: Decimal, currency: Currency) -> MoneyResult<Self> {
        Ok(Self::new(round_to_minor(cents)?, currency))
    }

    /// Creates Money from an amount in major units (`100.37` -> 10037 cents).
    pub fn from_major(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(overflow)?;
        Self::from_decimal(cents, currency)
    }

    /// Creates Money in the default currency.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(cents, DEFAULT_CURRENCY)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn empty(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Creates Money in US dollars.
    #[must_use]
    pub fn us_dollar(cents: i64) -> Self {
        Self::new(cents, Currency::USD)
    }

    /// Creates Money in Canadian dollars.
    #[must_use]
    pub fn ca_dollar(cents: i64) -> Self {
        Self::new(cents, Currency::CAD)
    }

    /// Creates Money in euros.
    #[must_use]
    pub fn euro(cents: i64) -> Self {
        Self::new(cents, Currency::EUR)
    }

    /// Creates Money in Brazilian reais.
    #[must_use]
    pub fn real(cents: i64) -> Self {
        Self::new(cents, Currency::BRL)
    }

    /// Same currency and bank, different amount.
    pub(crate) fn with_cents(&self, cents: i64) -> Self {
        Self {
            cents,
            currency: self.currency.clone(),
            bank: Arc::clone(&self.bank),
        }
    }

    /// The amount in minor units.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The bank used for conversions.
    #[must_use]
    pub fn bank(&self) -> &Arc<dyn ExchangeBank> {
        &self.bank
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// The amount in major units (`1050` cents -> `10.50`).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }

    /// Converts this amount into another currency through its bank.
    pub fn exchange_to(&self, target: &Currency) -> MoneyResult<Self> {
        let cents = self
            .bank
            .exchange(self.cents, self.currency.as_str(), target.as_str())?;
        Ok(Self::with_bank(cents, target.clone(), Arc::clone(&self.bank)))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.cents == other.cents && self.currency == other.currency
    }
}

impl Eq for Money {}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Money")
            .field("cents", &self.cents)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

/// Plain amount with two decimals and no symbol: `Money::from_cents(1000)`
/// displays as `10.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
