//! HTTP provider layer: `ProviderHttp` with opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::ProviderHttp;
pub use retry::{RetryConfig, RetryPolicy};
