//! Cache port: get/put of a series with expiry.
//!
//! The core only sees [`SeriesCache`]; any TTL key-value store can sit
//! behind it. [`MemoryCache`] is the bundled in-process implementation.

mod memory;

pub use memory::MemoryCache;

use crate::domain::price_history::Series;
use crate::error::CacheError;
use crate::shared::{Interval, Symbol};
use async_trait::async_trait;

/// Key-value cache of series with a per-write TTL.
#[async_trait]
pub trait SeriesCache: Send + Sync {
    /// Return the live entry for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<Series>, CacheError>;

    /// Write `value` under `key`, overwriting any previous entry.
    async fn put(&self, key: &str, value: &Series, ttl_secs: u64) -> Result<(), CacheError>;
}

/// Cache key for one symbol + interval: `price:<SYMBOL>:<interval>`.
pub fn series_key(symbol: &Symbol, interval: Interval) -> String {
    format!("price:{}:{}", symbol, interval)
}
