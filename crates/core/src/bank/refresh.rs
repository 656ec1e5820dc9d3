//! Periodic background rate refresh.
//!
//! The refresher runs on the tokio runtime. Each tick fetches a feed on a
//! blocking worker, bounded by a timeout, and only then swaps the new table
//! into the bank. A failed tick is logged and the previous table stays in
//! place until the next tick.

use std::sync::Arc;
use std::time::Duration;

use cambio_shared::config::RefreshConfig;
use cambio_shared::{FetchError, MoneyError, MoneyResult};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::source::RateSource;
use super::variable::VariableExchangeBank;

/// Fetches a feed from `source` within `timeout` and installs it into `bank`.
pub async fn refresh_once(
    bank: &VariableExchangeBank,
    source: &Arc<dyn RateSource>,
    timeout: Duration,
) -> Result<usize, FetchError> {
    let fetch_source = Arc::clone(source);
    let fetch = tokio::task::spawn_blocking(move || fetch_source.fetch_rates());

    let feed = match tokio::time::timeout(timeout, fetch).await {
        Err(_) => return Err(FetchError::Timeout(timeout)),
        Ok(Err(join_error)) => return Err(FetchError::Source(join_error.to_string())),
        Ok(Ok(result)) => result?,
    };

    bank.install_feed(&feed)
}

/// Handle to a running background refresh loop.
///
/// The loop stops when [`stop`](Self::stop) is called or the handle is
/// dropped.
#[derive(Debug)]
pub struct AutoRefresh {
    handle: JoinHandle<()>,
}

impl AutoRefresh {
    /// Starts refreshing `bank` from `source` every `interval`.
    ///
    /// The first refresh happens immediately. Must be called from within a
    /// tokio runtime. A zero `interval` is rejected with `InvalidArgument`.
    pub fn spawn(
        bank: Arc<VariableExchangeBank>,
        source: Arc<dyn RateSource>,
        interval: Duration,
        timeout: Duration,
    ) -> MoneyResult<Self> {
        if interval.is_zero() {
            return Err(MoneyError::InvalidArgument(
                "refresh interval must be positive".to_string(),
            ));
        }

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match refresh_once(&bank, &source, timeout).await {
                    Ok(loaded) => debug!(loaded, "Exchange rates refreshed"),
                    Err(err) => warn!(
                        error = %err,
                        retryable = err.is_retryable(),
                        "Exchange rate refresh failed, keeping current rates"
                    ),
                }
            }
        });

        Ok(Self { handle })
    }

    /// Starts a refresh loop using the interval and timeout from configuration.
    pub fn from_config(
        bank: Arc<VariableExchangeBank>,
        source: Arc<dyn RateSource>,
        config: &RefreshConfig,
    ) -> MoneyResult<Self> {
        Self::spawn(bank, source, config.interval(), config.timeout())
    }

    /// Returns true while the loop is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the loop. An in-flight fetch is abandoned, not awaited.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
