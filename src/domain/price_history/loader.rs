//! Series loader: cache first, provider on miss.

use super::wire::HistoricalPricesResponse;
use super::Series;
use crate::cache::{series_key, SeriesCache};
use crate::error::PriceError;
use crate::shared::time::lookback_window;
use crate::shared::{Interval, Symbol};
use crate::source::PriceSource;
use chrono::Utc;
use futures_util::future::try_join_all;
use std::sync::Arc;

/// Resolves one symbol's series through the cache port, falling back to the
/// price source and populating the cache on miss.
#[derive(Clone)]
pub struct SeriesLoader {
    source: Arc<dyn PriceSource>,
    cache: Arc<dyn SeriesCache>,
    cache_ttl_secs: u64,
}

impl SeriesLoader {
    pub fn new(
        source: Arc<dyn PriceSource>,
        cache: Arc<dyn SeriesCache>,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            source,
            cache,
            cache_ttl_secs,
        }
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }

    /// Cached series if live, otherwise a fresh fetch written back to the cache.
    ///
    /// A hit is returned unchanged and never rewritten.
    pub async fn load(&self, symbol: &Symbol, interval: Interval) -> Result<Series, PriceError> {
        let key = series_key(symbol, interval);
        if let Some(series) = self.cache.get(&key).await? {
            tracing::debug!(key = %key, points = series.len(), "Cache hit");
            return Ok(series);
        }

        tracing::debug!(key = %key, "Cache miss");
        self.fetch_and_store(symbol, interval).await
    }

    /// Load every symbol concurrently. Fails as a whole if any load fails.
    pub async fn load_all(
        &self,
        symbols: &[Symbol],
        interval: Interval,
    ) -> Result<Vec<Series>, PriceError> {
        try_join_all(symbols.iter().map(|s| self.load(s, interval))).await
    }

    /// Fetch from the provider, bypassing the cache read, and write through.
    pub async fn fetch_and_store(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<Series, PriceError> {
        let series = self.fetch(symbol, interval).await?;
        self.cache
            .put(&series_key(symbol, interval), &series, self.cache_ttl_secs)
            .await?;
        Ok(series)
    }

    async fn fetch(&self, symbol: &Symbol, interval: Interval) -> Result<Series, PriceError> {
        let (start, end) = lookback_window(Utc::now(), interval.window());
        tracing::debug!(
            symbol = %symbol,
            interval = %interval,
            granularity = interval.granularity(),
            "Fetching {} → {}",
            start,
            end
        );

        let resp: HistoricalPricesResponse = self
            .source
            .fetch_historical(symbol, start, end, interval.granularity())
            .await?;

        Ok(Series::try_from((symbol.clone(), interval, resp))?)
    }
}
