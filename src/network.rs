//! Provider URL and service-wide constants.

/// Default historical-price provider base URL.
pub const DEFAULT_PROVIDER_URL: &str = "https://api.g.alchemy.com/prices/v1";

/// TTL applied to every cached series, independent of interval.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Transport timeout for a single provider request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Symbols the periodic refresh task keeps warm.
pub const DEFAULT_WARM_SYMBOLS: &[&str] = &["ETH", "BTC", "SOL", "USDC", "LINK", "UNI"];

/// Environment variable names read by `PriceClientBuilder::from_env`.
pub const ENV_PROVIDER_URL: &str = "PRICE_PROVIDER_URL";
pub const ENV_PROVIDER_API_KEY: &str = "PRICE_PROVIDER_API_KEY";
pub const ENV_CACHE_TTL_SECS: &str = "PRICE_CACHE_TTL_SECS";
