//! Lists of money values.

use std::ops::Deref;
use std::sync::Arc;

use cambio_shared::{DEFAULT_CURRENCY, MoneyResult};

use super::Money;
use crate::bank::conversion::overflow;

/// Ordered list of money values, such as a set of installments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet(Vec<Money>);

impl Wallet {
    /// Wraps a list of values.
    #[must_use]
    pub fn new(items: Vec<Money>) -> Self {
        Self(items)
    }

    /// Adds up the cents of every element.
    ///
    /// The total takes the currency and bank of the first element; no
    /// conversion happens, so the wallet should hold a single currency. An
    /// empty wallet sums to zero in the default currency.
    pub fn sum(&self) -> MoneyResult<Money> {
        let Some(first) = self.0.first() else {
            return Ok(Money::empty(DEFAULT_CURRENCY));
        };
        let cents = self
            .0
            .iter()
            .try_fold(0i64, |total, money| total.checked_add(money.cents))
            .ok_or_else(overflow)?;
        Ok(Money::with_bank(
            cents,
            first.currency.clone(),
            Arc::clone(&first.bank),
        ))
    }

    /// Renders each element with `Display`.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Unwraps the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Money> {
        self.0
    }
}

impl Deref for Wallet {
    type Target = [Money];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Money>> for Wallet {
    fn from(items: Vec<Money>) -> Self {
        Self(items)
    }
}

impl FromIterator<Money> for Wallet {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Wallet {
    type Item = Money;
    type IntoIter = std::vec::IntoIter<Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Wallet {
    type Item = &'a Money;
    type IntoIter = std::slice::Iter<'a, Money>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
