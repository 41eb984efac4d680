//! Aggregate domain: align N series on a regular timeline and combine them
//! with normalized weights.

pub mod align;
pub mod client;

use crate::domain::price_history::Series;
use crate::error::PriceError;
use crate::shared::time::regular_timeline;
use crate::shared::{Interval, WeightVector};
use align::{common_window, SeriesLookup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of a weighted series on the regular timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Combine `series` into one weighted series stepped by `interval.step()`.
///
/// The timeline runs from the latest first-timestamp to the earliest
/// last-timestamp across all series. Each series is linearly interpolated at
/// every timeline instant (clamped at its boundaries), and the weighted sum is
/// divided by the weight sum at every instant.
pub fn aggregate(
    series: &[Series],
    weights: &WeightVector,
    interval: Interval,
) -> Result<Vec<AlignedPoint>, PriceError> {
    if series.is_empty() {
        return Err(PriceError::InvalidInput("No series to aggregate".to_string()));
    }
    if series.len() != weights.len() {
        return Err(PriceError::InvalidInput(format!(
            "{} series but {} weights",
            series.len(),
            weights.len()
        )));
    }

    let (start, end) = common_window(series).ok_or_else(|| {
        let symbols: Vec<&str> = series.iter().map(|s| s.symbol().as_str()).collect();
        PriceError::InsufficientOverlap(format!(
            "No common time window across {}",
            symbols.join(", ")
        ))
    })?;

    let lookups: Vec<SeriesLookup> = series
        .iter()
        .map(|s| SeriesLookup::within(s, start, end))
        .collect();

    let weights = weights.as_slice();
    let timeline = regular_timeline(start, end, interval.step());
    tracing::debug!(
        series = series.len(),
        points = timeline.len(),
        "Aligning {} → {}",
        start,
        end
    );

    let mut out = Vec::with_capacity(timeline.len());
    for t in timeline {
        let mut weighted = 0.0;
        let mut weight_sum = 0.0;
        for (lookup, w) in lookups.iter().zip(weights) {
            // Every lookup has at least one knot: the series brackets the window.
            let v = lookup.value_at(t).ok_or_else(|| {
                PriceError::InsufficientOverlap(format!("No data around {}", t))
            })?;
            weighted += w * v;
            weight_sum += w;
        }
        out.push(AlignedPoint {
            timestamp: t,
            value: weighted / weight_sum,
        });
    }

    Ok(out)
}
