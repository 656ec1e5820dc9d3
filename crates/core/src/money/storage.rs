//! Persistence boundary.
//!
//! Storage layers keep money as two columns, an integer amount and a
//! currency code. These helpers convert between that pair and [`Money`];
//! the serde representation uses the same shape.

use cambio_shared::{Currency, DEFAULT_CURRENCY, MoneyResult};
use serde::{Deserialize, Serialize};

use super::Money;

/// Serialized form of [`Money`]: `{"cents": 1050, "currency": "USD"}`.
///
/// The bank is not stored; deserialized values use the default bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMoney {
    /// Amount in minor units.
    pub cents: i64,
    /// Currency code.
    pub currency: Currency,
}

impl From<Money> for StoredMoney {
    fn from(money: Money) -> Self {
        Self {
            cents: money.cents,
            currency: money.currency,
        }
    }
}

impl From<StoredMoney> for Money {
    fn from(stored: StoredMoney) -> Self {
        Self::new(stored.cents, stored.currency)
    }
}

impl Money {
    /// Builds a value from stored columns; a missing currency means the
    /// default currency.
    pub fn from_stored_columns(cents: i64, currency: Option<&str>) -> MoneyResult<Self> {
        let currency = match currency {
            Some(code) => Currency::new(code)?,
            None => DEFAULT_CURRENCY,
        };
        Ok(Self::new(cents, currency))
    }

    /// The `(cents, currency)` pair to store.
    #[must_use]
    pub fn to_stored_columns(&self) -> (i64, String) {
        (self.cents, self.currency.to_string())
    }
}
