//! Money values, exchange banks, and formatting for cambio.
//!
//! This crate contains pure value logic with ZERO persistence dependencies.
//! Amounts are integer minor units; rates are `Decimal`. Nothing here touches
//! floating point.
//!
//! # Modules
//!
//! - `bank` - Exchange banks, rate tables, rate sources and background refresh
//! - `money` - The `Money` value type, arithmetic, interest, installments,
//!   formatting and parsing

pub mod bank;
pub mod money;

pub use bank::{
    AutoRefresh, ExchangeBank, JsonRateSource, ROUNDING_STRATEGY, RateFeed, RateSource,
    RateTable, StaticRateSource, VariableExchangeBank, default_bank,
};
pub use cambio_shared::{Currency, FetchError, MoneyError, MoneyResult};
pub use money::{FormatOptions, Money, Operand, RemainderPlacement, Wallet};
