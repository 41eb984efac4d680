#![cfg(feature = "http")]

//! Integration tests against the live historical-price provider.
//!
//! All tests are `#[ignore]` because they require network access and an API
//! key in `PRICE_PROVIDER_API_KEY` (a `.env` file is honored).
//!
//! Run with:
//! ```bash
//! cargo test --test provider_live -- --ignored
//! ```

use std::time::Duration;

use token_price_history::prelude::*;

fn live_client() -> PriceClient {
    let _ = dotenvy::dotenv();
    PriceClientBuilder::from_env()
        .expect("environment should be readable")
        .in_memory_cache()
        .request_timeout(Duration::from_secs(15))
        .retry_policy(RetryPolicy::Idempotent)
        .build()
        .expect("PRICE_PROVIDER_API_KEY must be set")
}

#[tokio::test]
#[ignore]
async fn test_live_series_is_sorted_and_cached() {
    let client = live_client();

    let series = client.series().get("ETH", Interval::Short).await.unwrap();
    assert!(!series.is_empty());
    for pair in series.points().windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }

    let again = client.series().get("eth", Interval::Short).await.unwrap();
    assert_eq!(series, again);
}

#[tokio::test]
#[ignore]
async fn test_live_basket_pnl() {
    let client = live_client();
    let result = client
        .pnl()
        .get(&["ETH", "BTC"], &[50.0, 50.0])
        .await
        .unwrap();
    assert!(result.pnl.is_finite());
    assert!(result.first_timestamp < result.last_timestamp);
}

#[tokio::test]
#[ignore]
async fn test_live_refresh_warm_set() {
    let client = live_client();
    let report = client
        .refresh_all(DEFAULT_WARM_SYMBOLS, Interval::Long)
        .await;
    assert!(!report.refreshed.is_empty(), "{:?}", report.failed);
}
