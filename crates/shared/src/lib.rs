//! Shared types, errors, and configuration for cambio.
//!
//! This crate provides the pieces every other crate builds on:
//! - Currency codes and the static currency metadata table
//! - Money and rate-fetch error types
//! - Configuration management
//! - Tracing setup for binaries embedding cambio

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::CambioConfig;
pub use error::{FetchError, MoneyError, MoneyResult};
pub use types::{Currency, CurrencyInfo, DEFAULT_CURRENCY, currency_info};
