//! Configuration management.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CambioConfig {
    /// Exchange bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Background rate refresh configuration.
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Exchange bank configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Currency every stored rate is expressed against.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
        }
    }
}

/// Background rate refresh configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between two refreshes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Upper bound for a single fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// JSON rate feed to load, if any.
    #[serde(default)]
    pub source_path: Option<PathBuf>,
}

fn default_interval_secs() -> u64 {
    3600 // 1 hour
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_secs: default_timeout_secs(),
            source_path: None,
        }
    }
}

impl RefreshConfig {
    /// Refresh period as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Fetch timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CambioConfig {
    /// Loads configuration from `.env`, config files, and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `CAMBIO__*` variables (`CAMBIO__BANK__BASE_CURRENCY=EUR`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CAMBIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
