//! Retry policies for provider requests.
//!
//! The core never retries on its own. `ProviderHttp` defaults to
//! [`RetryPolicy::None`]; retries are a transport-level opt-in.

use std::time::Duration;

/// Retry policy attached to a `ProviderHttp`.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    #[default]
    None,
    /// Historical reads are safe to repeat even though they go out as POST.
    /// Retries transport failures and 429/502/503/504.
    Idempotent,
    Custom(RetryConfig),
}

/// Backoff parameters.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the initial request.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_factor: f64,
    /// Fraction of the computed delay used as ± jitter; `0.0` disables it.
    pub jitter_fraction: f64,
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter_fraction: 0.25,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    pub fn retries_status(&self, status: u16) -> bool {
        self.retryable_statuses.contains(&status)
    }

    /// Delay before retry number `attempt` (0-indexed), capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter_fraction > 0.0 {
            let range = capped * self.jitter_fraction;
            (capped + (rand::random::<f64>() - 0.5) * 2.0 * range).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
