//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format callers and the provider use, so they can be used directly in
//! wire types without conversion overhead.

pub mod serde_util;
pub mod time;
pub mod weights;

pub use weights::{RawWeightForm, WeightVector};

use crate::error::PriceError;
use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for token tickers (e.g. `"ETH"`).
///
/// Always trimmed and upper-cased, so `eth`, ` Eth ` and `ETH` share one
/// cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: &str) -> Result<Self, PriceError> {
        let normalized = s.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(PriceError::InvalidInput("Empty symbol".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for output keys.
    pub fn to_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Parse a batch of raw ticker strings, failing on the first invalid one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Symbol>, PriceError> {
        raw.iter().map(|s| Symbol::new(s.as_ref())).collect()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::new(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = PriceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Symbol::new(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Symbol::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Lookback tier. Governs both the window requested from the provider and
/// the step of the regular timeline used for alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "24h", alias = "1d", alias = "short")]
    Short,
    #[serde(rename = "7d", alias = "medium")]
    Medium,
    #[serde(rename = "30d", alias = "long")]
    Long,
}

impl Interval {
    pub const ALL: [Interval; 3] = [Interval::Short, Interval::Medium, Interval::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "24h",
            Self::Medium => "7d",
            Self::Long => "30d",
        }
    }

    /// Lookback window in seconds.
    pub fn window_seconds(&self) -> i64 {
        match self {
            Self::Short => 86_400,
            Self::Medium => 7 * 86_400,
            Self::Long => 30 * 86_400,
        }
    }

    /// Regular timeline step in seconds.
    pub fn step_seconds(&self) -> i64 {
        match self {
            Self::Short => 300,
            Self::Medium => 3_600,
            Self::Long => 86_400,
        }
    }

    pub fn window(&self) -> TimeDelta {
        TimeDelta::seconds(self.window_seconds())
    }

    pub fn step(&self) -> TimeDelta {
        TimeDelta::seconds(self.step_seconds())
    }

    /// Sampling granularity string sent to the provider.
    pub fn granularity(&self) -> &'static str {
        match self {
            Self::Short => "5m",
            Self::Medium => "1h",
            Self::Long => "1d",
        }
    }

    /// Upper bound on aligned points for a window of this tier.
    pub fn max_points(&self) -> usize {
        (self.window_seconds() / self.step_seconds()) as usize + 1
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Interval {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "1d" | "short" => Ok(Self::Short),
            "7d" | "medium" => Ok(Self::Medium),
            "30d" | "long" => Ok(Self::Long),
            other => Err(PriceError::InvalidInput(format!(
                "Unknown interval: {}",
                other
            ))),
        }
    }
}
