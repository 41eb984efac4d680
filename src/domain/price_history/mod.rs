//! Price history domain: per-symbol series, cache-or-fetch loading.

pub mod client;
mod convert;
pub mod loader;
pub mod wire;

use crate::error::PriceError;
use crate::shared::{Interval, Symbol};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::SeriesConversionError;
pub use loader::SeriesLoader;

/// A single provider-supplied observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub value: Decimal,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, value: Decimal) -> Self {
        Self { timestamp, value }
    }

    /// Value as `f64` for alignment math.
    pub fn value_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(f64::NAN)
    }
}

/// Ascending, non-empty price history for one symbol and interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    symbol: Symbol,
    interval: Interval,
    points: Vec<PricePoint>,
}

#[derive(Deserialize)]
struct RawSeries {
    symbol: Symbol,
    interval: Interval,
    points: Vec<PricePoint>,
}

impl TryFrom<RawSeries> for Series {
    type Error = PriceError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Series::new(raw.symbol, raw.interval, raw.points)
    }
}

impl Series {
    /// Build a series, sorting points by timestamp.
    ///
    /// Zero points is `DataUnavailable`: an empty series never exists.
    pub fn new(
        symbol: Symbol,
        interval: Interval,
        mut points: Vec<PricePoint>,
    ) -> Result<Self, PriceError> {
        if points.is_empty() {
            return Err(PriceError::DataUnavailable(format!(
                "No price points for {} over {}",
                symbol, interval
            )));
        }
        points.sort_by_key(|p| p.timestamp);
        Ok(Self {
            symbol,
            interval,
            points,
        })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    /// Latest point by order.
    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
