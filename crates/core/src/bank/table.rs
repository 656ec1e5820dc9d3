//! Immutable rate table snapshots.
//!
//! Every stored rate is "units of this currency per one unit of the table's
//! pivot". Rates registered one at a time are scaled by the base currency's
//! own stored rate so the table stays in one consistent unit no matter in
//! which order rates arrive; lookups divide that scale back out.

use std::collections::HashMap;

use cambio_shared::{Currency, FetchError, MoneyError, MoneyResult};
use rust_decimal::Decimal;

use super::conversion::convert_cents;
use super::source::RateFeed;

/// A consistent set of exchange rates against one base currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, Decimal>,
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

impl RateTable {
    /// Creates a table that only knows its base currency, at rate 1.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let base = normalize(base);
        let mut rates = HashMap::new();
        rates.insert(base.clone(), Decimal::ONE);
        Self { base, rates }
    }

    /// Builds a table from a feed quoted against the feed's own pivot.
    ///
    /// The pivot is stored at rate 1 and each pair as quoted; `base` must be
    /// either the pivot or one of the quoted currencies.
    pub fn from_feed(base: &str, feed: &RateFeed) -> Result<Self, FetchError> {
        let base = normalize(base);
        let mut rates = HashMap::with_capacity(feed.rates.len() + 1);
        rates.insert(normalize(&feed.base), Decimal::ONE);

        for (currency, rate) in &feed.rates {
            if *rate <= Decimal::ZERO {
                return Err(FetchError::InvalidRate {
                    currency: currency.clone(),
                    rate: *rate,
                });
            }
            rates.insert(normalize(currency), *rate);
        }

        if !rates.contains_key(&base) {
            return Err(FetchError::MissingBase(base));
        }

        Ok(Self { base, rates })
    }

    /// The base currency code.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    fn base_rate(&self) -> Decimal {
        self.rates.get(&self.base).copied().unwrap_or(Decimal::ONE)
    }

    /// Number of currencies in the table, base included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false: the base currency is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns true if the currency has a rate.
    #[must_use]
    pub fn contains(&self, currency: &str) -> bool {
        self.rates.contains_key(&normalize(currency))
    }

    /// Registers `rate` units of `currency` per one unit of the base.
    ///
    /// The base currency itself is stored as given; any other currency is
    /// scaled by the base's current stored rate. Last write wins. The code
    /// must be a valid [`Currency`] code.
    pub fn insert(&mut self, currency: &str, rate: Decimal) -> MoneyResult<()> {
        let code = String::from(Currency::new(currency)?);
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidArgument(format!(
                "exchange rate for {code} must be positive, got {rate}"
            )));
        }

        let stored = if code == self.base {
            rate
        } else {
            rate.checked_mul(self.base_rate()).ok_or_else(|| {
                MoneyError::InvalidArgument(format!("exchange rate for {code} out of range"))
            })?
        };
        self.rates.insert(code, stored);
        Ok(())
    }

    /// Returns units of `currency` per one unit of the base.
    #[must_use]
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        let code = normalize(currency);
        let stored = *self.rates.get(&code)?;
        if code == self.base {
            Some(stored)
        } else {
            stored.checked_div(self.base_rate())
        }
    }

    /// Converts minor units between two currencies, pivoting on the base.
    pub fn exchange(&self, cents: i64, from: &str, to: &str) -> MoneyResult<i64> {
        let from = normalize(from);
        let to = normalize(to);
        if from == to {
            return Ok(cents);
        }

        match (self.rates.get(&from), self.rates.get(&to)) {
            (Some(from_rate), Some(to_rate)) => convert_cents(cents, *from_rate, *to_rate),
            _ => Err(MoneyError::UnknownRate { from, to }),
        }
    }

    /// Iterates over `(currency, normalized rate)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.rates
            .keys()
            .filter_map(|code| Some((code.as_str(), self.get(code)?)))
    }
}
