//! Cache warming for a fixed symbol set, driven by an external scheduler.

use crate::client::PriceClient;
use crate::shared::{Interval, Symbol};
use futures_util::future::join_all;
use serde::Serialize;

/// Outcome of one [`PriceClient::refresh_all`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub refreshed: Vec<String>,
    /// `(symbol, error message)` for each symbol that could not be refreshed.
    pub failed: Vec<(String, String)>,
}

impl RefreshReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl PriceClient {
    /// Re-fetch every symbol from the source and overwrite its cache entry.
    ///
    /// Never fails. Each symbol is refreshed independently; failures are
    /// logged and listed in the report.
    pub async fn refresh_all<S: AsRef<str>>(
        &self,
        symbols: &[S],
        interval: Interval,
    ) -> RefreshReport {
        let tasks = symbols.iter().map(|raw| async move {
            let raw = raw.as_ref();
            let result = match Symbol::new(raw) {
                Ok(symbol) => self
                    .loader
                    .fetch_and_store(&symbol, interval)
                    .await
                    .map(|series| (symbol.to_string(), series.len())),
                Err(e) => Err(e),
            };
            (raw.to_string(), result)
        });

        let mut report = RefreshReport::default();
        for (raw, result) in join_all(tasks).await {
            match result {
                Ok((symbol, points)) => {
                    tracing::debug!(symbol = %symbol, interval = %interval, points, "Refreshed");
                    report.refreshed.push(symbol);
                }
                Err(e) => {
                    tracing::warn!(symbol = %raw, interval = %interval, error = %e, "Refresh failed");
                    report.failed.push((raw, e.to_string()));
                }
            }
        }

        tracing::info!(
            interval = %interval,
            refreshed = report.refreshed.len(),
            failed = report.failed.len(),
            "Refresh pass complete"
        );
        report
    }
}
