//! Unified error types.

use thiserror::Error;

/// Top-level error returned by every core entry point.
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] HttpError),

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Insufficient overlap: {0}")]
    InsufficientOverlap(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl PriceError {
    /// Whether the failure was caused by the caller's request rather than
    /// by the service or one of its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PriceError::InvalidInput(_)
                | PriceError::InsufficientOverlap(_)
                | PriceError::DataUnavailable(_)
        )
    }

    /// HTTP status the boundary layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            PriceError::InvalidInput(_) => 400,
            PriceError::DataUnavailable(_) => 404,
            PriceError::InsufficientOverlap(_) => 422,
            PriceError::Upstream(_) | PriceError::MalformedPayload(_) => 502,
            PriceError::Configuration(_) | PriceError::DivisionByZero(_) | PriceError::Cache(_) => {
                500
            }
        }
    }
}

/// HTTP-layer errors raised by the price source adapter.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Cache backend errors.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend failure: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
