//! Rate sources feeding an exchange bank.
//!
//! A source produces a [`RateFeed`]: a pivot currency and the rates of other
//! currencies against it. Where the feed comes from (a file, a fixture, a
//! daily reference-rate publication) is an adapter detail; the bank only sees
//! the feed.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cambio_shared::FetchError;
use cambio_shared::config::RefreshConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rates quoted against a pivot currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateFeed {
    /// Pivot currency code; implicitly rate 1.
    pub base: String,
    /// Units of each currency per one unit of the pivot.
    pub rates: BTreeMap<String, Decimal>,
}

/// Something that can produce a rate feed.
///
/// Implementations may block; the background refresher runs them on a
/// blocking worker.
#[cfg_attr(test, mockall::automock)]
pub trait RateSource: Send + Sync {
    /// Fetches a complete feed.
    fn fetch_rates(&self) -> Result<RateFeed, FetchError>;
}

/// A fixed, in-memory feed.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    feed: RateFeed,
}

impl StaticRateSource {
    /// Creates a source always returning the given pairs against `base`.
    pub fn new<I, S>(base: &str, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            feed: RateFeed {
                base: base.to_string(),
                rates: rates
                    .into_iter()
                    .map(|(code, rate)| (code.into(), rate))
                    .collect(),
            },
        }
    }
}

impl RateSource for StaticRateSource {
    fn fetch_rates(&self) -> Result<RateFeed, FetchError> {
        Ok(self.feed.clone())
    }
}

/// A JSON document of the form `{"base": "EUR", "rates": {"USD": "1.08"}}`.
///
/// Rates may be JSON strings or numbers; strings keep full precision.
#[derive(Debug, Clone)]
pub enum JsonRateSource {
    /// The document itself.
    Inline(String),
    /// A file holding the document, re-read on every fetch.
    File(PathBuf),
}

impl JsonRateSource {
    /// Parses a feed document.
    pub fn parse(document: &str) -> Result<RateFeed, FetchError> {
        serde_json::from_str(document).map_err(|err| FetchError::Parse(err.to_string()))
    }

    /// The file source named by `refresh.source_path`, if one is configured.
    #[must_use]
    pub fn from_config(config: &RefreshConfig) -> Option<Self> {
        config.source_path.clone().map(Self::File)
    }
}

impl RateSource for JsonRateSource {
    fn fetch_rates(&self) -> Result<RateFeed, FetchError> {
        match self {
            Self::Inline(document) => Self::parse(document),
            Self::File(path) => {
                let document = std::fs::read_to_string(path)?;
                Self::parse(&document)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_static_source_returns_feed() {
        let source = StaticRateSource::new("EUR", [("USD", dec!(1.08)), ("BRL", dec!(5.9))]);
        let feed = source.fetch_rates().unwrap();
        assert_eq!(feed.base, "EUR");
        assert_eq!(feed.rates.get("USD"), Some(&dec!(1.08)));
        assert_eq!(feed.rates.len(), 2);
    }

    #[test]
    fn test_parse_json_feed_with_strings_and_numbers() {
        let feed = JsonRateSource::parse(
            r#"{"base": "EUR", "rates": {"USD": "1.0812", "JPY": 160, "GBP": 0.5}}"#,
        )
        .unwrap();

        assert_eq!(feed.base, "EUR");
        assert_eq!(feed.rates.get("USD"), Some(&dec!(1.0812)));
        assert_eq!(feed.rates.get("JPY"), Some(&dec!(160)));
        assert_eq!(feed.rates.get("GBP"), Some(&dec!(0.5)));
    }

    #[test]
    fn test_parse_rejects_malformed_feed() {
        let err = JsonRateSource::parse(r#"{"rates": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_inline_source() {
        let source = JsonRateSource::Inline(r#"{"base": "USD", "rates": {"EUR": "0.5"}}"#.into());
        assert_eq!(
            source.fetch_rates().unwrap().rates.get("EUR"),
            Some(&dec!(0.5))
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonRateSource::File(PathBuf::from("/nonexistent/cambio/rates.json"));
        assert!(matches!(source.fetch_rates(), Err(FetchError::Io(_))));
    }

    #[test]
    fn test_from_config_uses_source_path() {
        let mut config = RefreshConfig::default();
        assert!(JsonRateSource::from_config(&config).is_none());

        config.source_path = Some(PathBuf::from("/nonexistent/rates.json"));
        let source = JsonRateSource::from_config(&config).unwrap();
        assert!(matches!(source.fetch_rates(), Err(FetchError::Io(_))));
    }
}
