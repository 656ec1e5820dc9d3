//! Common types used across the workspace.

pub mod currency;
pub mod metadata;

pub use currency::{Currency, DEFAULT_CURRENCY};
pub use metadata::{CurrencyInfo, currency_info};
