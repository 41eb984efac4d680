//! Low-level HTTP client: `ProviderHttp`.
//!
//! Talks to the historical-price provider and returns wire types (conversion
//! to domain types happens in the loader). Implements [`PriceSource`].

use crate::domain::price_history::wire::{HistoricalPricesRequest, HistoricalPricesResponse};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Symbol;
use crate::source::PriceSource;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for the historical-price provider.
#[derive(Clone)]
pub struct ProviderHttp {
    base_url: String,
    /// Provider credential, embedded in the request path. NEVER logged.
    api_key: String,
    client: Client,
    retry: RetryPolicy,
}

impl ProviderHttp {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            retry: RetryPolicy::None,
        })
    }

    /// Opt into transport-level retries. The default is `RetryPolicy::None`.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Historical prices ────────────────────────────────────────────────

    pub async fn get_historical_prices(
        &self,
        request: &HistoricalPricesRequest,
    ) -> Result<HistoricalPricesResponse, HttpError> {
        let url = format!(
            "{}/{}/tokens/historical",
            self.base_url,
            urlencoding::encode(&self.api_key)
        );
        self.post(&url, request, self.retry.clone()).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.retries_status(*status),
                        HttpError::RateLimited { retry_after_ms } => {
                            let retry = config.retries_status(429);
                            if let (true, Some(ms)) = (retry, retry_after_ms) {
                                let wait = Duration::from_millis(*ms).min(config.max_delay);
                                futures_timer::Delay::new(wait).await;
                            }
                            retry
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if !should_retry {
                        return Err(e);
                    }
                    if attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying provider request"
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json");

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs.saturating_mul(1000));
        let body_text = resp.text().await.unwrap_or_default();

        Err(classify_status(status_code, body_text, retry_after_ms))
    }
}

/// Map a non-success status to an `HttpError`.
fn classify_status(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 | 403 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[async_trait]
impl PriceSource for ProviderHttp {
    async fn fetch_historical(
        &self,
        symbol: &Symbol,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        granularity: &str,
    ) -> Result<HistoricalPricesResponse, HttpError> {
        let request =
            HistoricalPricesRequest::new(symbol.as_str(), start_time, end_time, granularity);
        self.get_historical_prices(&request).await
    }
}
