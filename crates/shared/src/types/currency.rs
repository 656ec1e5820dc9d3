//! Currency codes.
//!
//! Codes are stored upper-cased, so two codes compare equal regardless of the
//! case they were written in. Any non-blank code is accepted: the exchange bank
//! and the metadata table decide whether they actually know about it.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// A currency code such as `USD` or `BRL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(Cow<'static, str>);

/// Currency used when none is given explicitly.
pub const DEFAULT_CURRENCY: Currency = Currency::USD;

impl Currency {
    /// US Dollar
    pub const USD: Self = Self::from_static("USD");
    /// Canadian Dollar
    pub const CAD: Self = Self::from_static("CAD");
    /// Euro
    pub const EUR: Self = Self::from_static("EUR");
    /// Brazilian Real
    pub const BRL: Self = Self::from_static("BRL");
    /// Pound Sterling
    pub const GBP: Self = Self::from_static("GBP");
    /// Japanese Yen
    pub const JPY: Self = Self::from_static("JPY");

    const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Creates a currency from a code, upper-casing it.
    ///
    /// Surrounding whitespace is ignored. A blank code, or one with
    /// anything other than ASCII letters and digits, is rejected.
    pub fn new(code: &str) -> MoneyResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(MoneyError::InvalidArgument(
                "currency code cannot be empty".to_string(),
            ));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MoneyError::InvalidArgument(format!(
                "currency code must be alphanumeric, got {code:?}"
            )));
        }
        Ok(Self(Cow::Owned(code.to_uppercase())))
    }

    /// Returns the canonical (upper-case) code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw code.
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0.into_owned()
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
