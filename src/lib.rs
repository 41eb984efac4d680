//! # Token Price History
//!
//! Cached token price series, weighted basket aggregates, gain/loss and
//! batch snapshots over a pluggable price source.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Symbols, intervals, weights, series and the pure aggregation math
//! 2. **Ports**: `PriceSource` and `SeriesCache` traits, plus the bundled `MemoryCache`
//! 3. **HTTP Source**: `ProviderHttp` with opt-in retry policies (feature `http`)
//! 4. **High-Level Client**: `PriceClient` with nested sub-clients and cache warming
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use token_price_history::prelude::*;
//!
//! let client = PriceClient::builder()
//!     .api_key("demo")
//!     .in_memory_cache()
//!     .build()?;
//!
//! let series = client.series().get("eth", Interval::Short).await?;
//! let basket = client.aggregates().get(&["eth", "btc"], &[60.0, 40.0], Interval::Medium).await?;
//! let pnl = client.pnl().get(&["eth", "btc"], &[0.5, 0.5]).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Provider URL, cache and environment constants.
pub mod network;

// ── Layer 2: Ports ───────────────────────────────────────────────────────────

/// Series cache port and the in-memory TTL implementation.
pub mod cache;

/// Price source port.
pub mod source;

// ── Layer 3: HTTP Source ─────────────────────────────────────────────────────

/// HTTP price provider with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PriceClient`: the primary entry point.
pub mod client;

/// Periodic cache warming.
pub mod refresh;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Interval, RawWeightForm, Symbol, WeightVector};

    // Domain types
    pub use crate::domain::aggregate::AlignedPoint;
    pub use crate::domain::pnl::PnlResult;
    pub use crate::domain::price_history::{PricePoint, Series};
    pub use crate::domain::snapshot::BatchSnapshot;

    // Errors
    pub use crate::error::{CacheError, HttpError, PriceError};

    // Network
    pub use crate::network::{DEFAULT_PROVIDER_URL, DEFAULT_WARM_SYMBOLS};

    // Ports
    pub use crate::cache::{MemoryCache, SeriesCache};
    pub use crate::source::PriceSource;

    // Client + sub-clients
    pub use crate::client::{
        AggregatesClient, PnlClient, PriceClient, PriceClientBuilder, SeriesSubClient,
        SnapshotsClient,
    };
    pub use crate::refresh::RefreshReport;
    #[cfg(feature = "http")]
    pub use crate::http::{ProviderHttp, RetryConfig, RetryPolicy};
}
