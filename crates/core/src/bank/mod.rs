//! Exchange banks and exchange rates.
//!
//! A bank converts minor-unit amounts between currencies. `Money` only talks
//! to the [`ExchangeBank`] trait; [`VariableExchangeBank`] is the stock
//! implementation, holding rates registered at runtime or loaded from a
//! [`RateSource`].

pub mod conversion;
pub mod refresh;
pub mod source;
pub mod table;
pub mod variable;

#[cfg(test)]
mod props;

use std::sync::Arc;

use cambio_shared::MoneyResult;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

pub use conversion::ROUNDING_STRATEGY;
pub use refresh::AutoRefresh;
pub use source::{JsonRateSource, RateFeed, RateSource, StaticRateSource};
pub use table::RateTable;
pub use variable::VariableExchangeBank;

/// Converts amounts between currencies.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeBank: Send + Sync {
    /// Checks whether two codes name the same currency, ignoring case.
    fn same_currency(&self, first: &str, second: &str) -> bool {
        first.trim().eq_ignore_ascii_case(second.trim())
    }

    /// Returns units of `currency` per one unit of the bank's base currency.
    fn get_rate(&self, currency: &str) -> Option<Decimal>;

    /// Converts `cents` of `from` into minor units of `to`.
    ///
    /// Fails with `MoneyError::UnknownRate` when either side has no rate.
    /// Converting a currency into itself never needs a rate.
    fn exchange(&self, cents: i64, from: &str, to: &str) -> MoneyResult<i64>;
}

static DEFAULT_BANK: Lazy<Arc<VariableExchangeBank>> =
    Lazy::new(|| Arc::new(VariableExchangeBank::new()));

/// Returns the process-wide bank used by `Money` values built without one.
///
/// Created on first use and shared for the life of the process. Code that
/// needs isolated rates (tests in particular) should build its own
/// `VariableExchangeBank` and pass it to `Money::with_bank`.
#[must_use]
pub fn default_bank() -> Arc<VariableExchangeBank> {
    Arc::clone(&DEFAULT_BANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_is_shared() {
        assert!(Arc::ptr_eq(&default_bank(), &default_bank()));
    }

    #[test]
    fn test_same_currency_default_method() {
        let bank = VariableExchangeBank::new();
        assert!(bank.same_currency("usd", "USD"));
        assert!(bank.same_currency(" eur", "EUR "));
        assert!(!bank.same_currency("USD", "EUR"));
    }
}
