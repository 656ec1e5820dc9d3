//! Exchange bank with manually registered or refreshed rates.

use std::sync::Arc;

use cambio_shared::config::BankConfig;
use cambio_shared::{Currency, FetchError, MoneyResult};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::ExchangeBank;
use super::source::{RateFeed, RateSource};
use super::table::RateTable;

/// Exchange bank whose rates are registered at runtime.
///
/// By default the bank only knows its base currency. Rates are added with
/// [`add_rate`](Self::add_rate) or replaced wholesale with
/// [`refresh`](Self::refresh):
///
/// ```
/// use cambio_core::{ExchangeBank, VariableExchangeBank};
/// use rust_decimal_macros::dec;
///
/// let bank = VariableExchangeBank::new();
/// bank.add_rate("USD", dec!(1.0)).unwrap();
/// bank.add_rate("EUR", dec!(0.5)).unwrap();
///
/// // 10.00 USD -> 5.00 EUR
/// assert_eq!(bank.exchange(10_00, "USD", "EUR").unwrap(), 5_00);
/// ```
///
/// The table is an immutable snapshot behind a lock. Readers clone the
/// snapshot and release the lock before computing; writers swap in a new
/// snapshot, so a reader never sees a half-applied refresh.
#[derive(Debug)]
pub struct VariableExchangeBank {
    base: Currency,
    table: RwLock<Arc<RateTable>>,
}

impl Default for VariableExchangeBank {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableExchangeBank {
    /// Creates a bank based on USD.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Currency::USD)
    }

    /// Creates a bank based on the given currency.
    #[must_use]
    pub fn with_base(base: Currency) -> Self {
        let table = RateTable::new(base.as_str());
        Self {
            base,
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Creates a bank from configuration.
    pub fn from_config(config: &BankConfig) -> MoneyResult<Self> {
        Ok(Self::with_base(Currency::new(&config.base_currency)?))
    }

    /// The base currency.
    #[must_use]
    pub fn base_currency(&self) -> &Currency {
        &self.base
    }

    /// Registers `rate` units of `currency` per one unit of the base.
    ///
    /// Upserts; the last registration for a currency wins.
    pub fn add_rate(&self, currency: &str, rate: Decimal) -> MoneyResult<()> {
        let mut guard = self.table.write();
        Arc::make_mut(&mut *guard).insert(currency, rate)?;
        debug!(currency = %currency.to_uppercase(), %rate, "Registered exchange rate");
        Ok(())
    }

    /// Returns a consistent snapshot of the current rates.
    #[must_use]
    pub fn rates(&self) -> Arc<RateTable> {
        Arc::clone(&self.table.read())
    }

    /// Replaces the whole table with rates from a feed.
    ///
    /// The new table is built without holding the lock; on error the
    /// current table is kept as is. Returns the number of loaded rates.
    pub fn install_feed(&self, feed: &RateFeed) -> Result<usize, FetchError> {
        let table = RateTable::from_feed(self.base.as_str(), feed)?;
        let loaded = table.len();
        *self.table.write() = Arc::new(table);
        info!(pivot = %feed.base, loaded, "Installed exchange rate table");
        Ok(loaded)
    }

    /// Fetches a feed from `source` and installs it.
    pub fn refresh(&self, source: &dyn RateSource) -> Result<usize, FetchError> {
        let feed = source.fetch_rates()?;
        self.install_feed(&feed)
    }
}

impl ExchangeBank for VariableExchangeBank {
    fn get_rate(&self, currency: &str) -> Option<Decimal> {
        self.rates().get(currency)
    }

    fn exchange(&self, cents: i64, from: &str, to: &str) -> MoneyResult<i64> {
        if self.same_currency(from, to) {
            return Ok(cents);
        }
        self.rates().exchange(cents, from, to)
    }
}
