//! High-level client: `PriceClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared loader, and accessor methods.

use crate::cache::{MemoryCache, SeriesCache};
use crate::domain::aggregate::client::Aggregates;
use crate::domain::pnl::client::Pnl;
use crate::domain::price_history::client::SeriesClient;
use crate::domain::price_history::SeriesLoader;
use crate::domain::snapshot::client::Snapshots;
use crate::error::PriceError;
use crate::network;
use crate::source::PriceSource;

use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "http")]
use crate::http::{ProviderHttp, RetryPolicy};

// Re-export sub-client types for convenience.
pub use crate::domain::aggregate::client::Aggregates as AggregatesClient;
pub use crate::domain::pnl::client::Pnl as PnlClient;
pub use crate::domain::price_history::client::SeriesClient as SeriesSubClient;
pub use crate::domain::snapshot::client::Snapshots as SnapshotsClient;

/// The primary entry point consumed by the HTTP layer.
///
/// Provides nested sub-client accessors for each domain:
/// `client.series()`, `client.aggregates()`, etc. Cloning is cheap and clones
/// share the same source and cache.
#[derive(Clone)]
pub struct PriceClient {
    pub(crate) loader: SeriesLoader,
}

impl PriceClient {
    pub fn builder() -> PriceClientBuilder {
        PriceClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn series(&self) -> SeriesClient<'_> {
        SeriesClient { client: self }
    }

    pub fn aggregates(&self) -> Aggregates<'_> {
        Aggregates { client: self }
    }

    pub fn pnl(&self) -> Pnl<'_> {
        Pnl { client: self }
    }

    pub fn snapshots(&self) -> Snapshots<'_> {
        Snapshots { client: self }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.loader.cache_ttl_secs())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PriceClientBuilder {
    provider_url: String,
    api_key: Option<String>,
    source: Option<Arc<dyn PriceSource>>,
    cache: Option<Arc<dyn SeriesCache>>,
    cache_ttl: Duration,
    request_timeout: Duration,
    #[cfg(feature = "http")]
    retry_policy: RetryPolicy,
}

impl Default for PriceClientBuilder {
    fn default() -> Self {
        Self {
            provider_url: network::DEFAULT_PROVIDER_URL.to_string(),
            api_key: None,
            source: None,
            cache: None,
            cache_ttl: Duration::from_secs(network::DEFAULT_CACHE_TTL_SECS),
            request_timeout: Duration::from_secs(network::DEFAULT_REQUEST_TIMEOUT_SECS),
            #[cfg(feature = "http")]
            retry_policy: RetryPolicy::None,
        }
    }
}

impl PriceClientBuilder {
    /// Start from environment variables.
    ///
    /// Reads `PRICE_PROVIDER_URL`, `PRICE_PROVIDER_API_KEY` and
    /// `PRICE_CACHE_TTL_SECS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, PriceError> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(network::ENV_PROVIDER_URL) {
            builder = builder.provider_url(&url);
        }
        if let Ok(key) = std::env::var(network::ENV_PROVIDER_API_KEY) {
            builder = builder.api_key(&key);
        }
        if let Ok(raw) = std::env::var(network::ENV_CACHE_TTL_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                PriceError::Configuration(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    network::ENV_CACHE_TTL_SECS,
                    raw
                ))
            })?;
            builder = builder.cache_ttl(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    pub fn provider_url(mut self, url: &str) -> Self {
        self.provider_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Use a custom price source instead of the HTTP provider.
    pub fn source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn cache(mut self, cache: Arc<dyn SeriesCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Bind a fresh [`MemoryCache`].
    pub fn in_memory_cache(self) -> Self {
        self.cache(Arc::new(MemoryCache::new()))
    }

    /// TTL applied to every cached series, whatever the interval.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[cfg(feature = "http")]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn build(self) -> Result<PriceClient, PriceError> {
        let cache = self.cache.clone().ok_or_else(|| {
            PriceError::Configuration("No cache bound to the price client".to_string())
        })?;
        let source = match self.source.clone() {
            Some(source) => source,
            None => self.http_source()?,
        };

        Ok(PriceClient {
            loader: SeriesLoader::new(source, cache, self.cache_ttl.as_secs()),
        })
    }

    #[cfg(feature = "http")]
    fn http_source(&self) -> Result<Arc<dyn PriceSource>, PriceError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                PriceError::Configuration(format!(
                    "Missing provider API key (set {})",
                    network::ENV_PROVIDER_API_KEY
                ))
            })?;
        let http = ProviderHttp::new(&self.provider_url, api_key, self.request_timeout)
            .map_err(|e| PriceError::Configuration(format!("HTTP client: {}", e)))?
            .with_retry(self.retry_policy.clone());
        Ok(Arc::new(http))
    }

    #[cfg(not(feature = "http"))]
    fn http_source(&self) -> Result<Arc<dyn PriceSource>, PriceError> {
        Err(PriceError::Configuration(
            "No price source configured and the `http` feature is disabled".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_cache_is_configuration_error() {
        let err = PriceClient::builder().api_key("k").build().err().unwrap();
        assert!(matches!(err, PriceError::Configuration(_)));
    }

    #[test]
    fn test_build_without_credentials_is_configuration_error() {
        let err = PriceClient::builder().in_memory_cache().build().err().unwrap();
        assert!(matches!(err, PriceError::Configuration(_)));

        let err = PriceClient::builder()
            .in_memory_cache()
            .api_key("   ")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, PriceError::Configuration(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_build_with_key_and_cache() {
        let client = PriceClient::builder()
            .api_key("demo")
            .in_memory_cache()
            .cache_ttl(Duration::from_secs(120))
            .build()
            .unwrap();
        assert_eq!(client.cache_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn test_default_ttl_is_fixed() {
        let b = PriceClientBuilder::default();
        assert_eq!(b.cache_ttl.as_secs(), network::DEFAULT_CACHE_TTL_SECS);
    }
}
