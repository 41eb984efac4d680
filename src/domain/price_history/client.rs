//! Series sub-client: single-symbol history through the cache.

use super::Series;
use crate::client::PriceClient;
use crate::error::PriceError;
use crate::shared::{Interval, Symbol};

/// Sub-client for per-symbol series.
pub struct SeriesClient<'a> {
    pub(crate) client: &'a PriceClient,
}

impl<'a> SeriesClient<'a> {
    /// Series for one symbol. Served from the cache while the entry is live.
    pub async fn get(&self, symbol: &str, interval: Interval) -> Result<Series, PriceError> {
        let symbol = Symbol::new(symbol)?;
        self.client.loader.load(&symbol, interval).await
    }

    /// Series for several symbols, loaded concurrently. All or nothing.
    pub async fn get_many<S: AsRef<str>>(
        &self,
        symbols: &[S],
        interval: Interval,
    ) -> Result<Vec<Series>, PriceError> {
        let symbols = Symbol::parse_all(symbols)?;
        self.client.loader.load_all(&symbols, interval).await
    }
}
