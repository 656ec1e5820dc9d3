//! Error types for money values, exchange banks, and rate sources.

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money operations and exchange banks.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// The bank has no rate for one side of a conversion.
    #[error("No conversion rate known for '{from}' -> '{to}'")]
    UnknownRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// An argument is out of range or refers to something unknown.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operand cannot be interpreted as money.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Refreshing rates from a source failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl MoneyError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRate { .. } => "UNKNOWN_RATE",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::TypeMismatch(_) => "TYPE_MISMATCH",
            Self::Fetch(err) => err.error_code(),
        }
    }

    /// Returns true if retrying the same call may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(err) => err.is_retryable(),
            _ => false,
        }
    }
}

/// Errors raised while fetching or parsing a rate feed.
///
/// A failed fetch never touches the rate table it was meant to replace.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source could not produce a feed.
    #[error("Rate source failed: {0}")]
    Source(String),

    /// The feed was produced but could not be parsed.
    #[error("Rate feed could not be parsed: {0}")]
    Parse(String),

    /// The feed quotes a zero or negative rate.
    #[error("Invalid rate {rate} for {currency}")]
    InvalidRate {
        /// Currency code carrying the bad rate.
        currency: String,
        /// The rate as quoted.
        rate: Decimal,
    },

    /// The feed does not quote the bank's base currency.
    #[error("Rate feed does not quote base currency {0}")]
    MissingBase(String),

    /// The source did not answer in time.
    #[error("Rate fetch timed out after {0:?}")]
    Timeout(Duration),

    /// Reading the feed failed.
    #[error("Rate source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Source(_) => "FETCH_SOURCE_ERROR",
            Self::Parse(_) => "FETCH_PARSE_ERROR",
            Self::InvalidRate { .. } => "FETCH_INVALID_RATE",
            Self::MissingBase(_) => "FETCH_MISSING_BASE",
            Self::Timeout(_) => "FETCH_TIMEOUT",
            Self::Io(_) => "FETCH_IO_ERROR",
        }
    }

    /// Returns true for transient failures worth another attempt.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Source(_) | Self::Timeout(_) | Self::Io(_))
    }
}
