//! Price source port: raw historical series for one symbol over a window.

use crate::domain::price_history::wire::HistoricalPricesResponse;
use crate::error::HttpError;
use crate::shared::Symbol;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Upstream provider of historical prices.
///
/// Implementations fail on non-success responses; an empty `points` array is
/// returned as-is and rejected by the loader.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_historical(
        &self,
        symbol: &Symbol,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        granularity: &str,
    ) -> Result<HistoricalPricesResponse, HttpError>;
}
