//! Gain/loss domain: percentage change across an aligned series.

pub mod client;

use crate::domain::aggregate::AlignedPoint;
use crate::error::PriceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Percentage change between the first and last aligned points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlResult {
    pub pnl: f64,
    pub first_value: f64,
    pub last_value: f64,
    pub first_timestamp: DateTime<Utc>,
    pub last_timestamp: DateTime<Utc>,
}

/// `(last - first) / first * 100`, with first/last taken by position.
pub fn percent_change(points: &[AlignedPoint]) -> Result<PnlResult, PriceError> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => {
            return Err(PriceError::InvalidInput(
                "Cannot compute change over an empty series".to_string(),
            ))
        }
    };

    if first.value == 0.0 {
        return Err(PriceError::DivisionByZero(format!(
            "Baseline value at {} is zero",
            first.timestamp
        )));
    }

    Ok(PnlResult {
        pnl: (last.value - first.value) / first.value * 100.0,
        first_value: first.value,
        last_value: last.value,
        first_timestamp: first.timestamp,
        last_timestamp: last.timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(secs: i64, value: f64) -> AlignedPoint {
        AlignedPoint {
            timestamp: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
            value,
        }
    }

    #[test]
    fn test_ten_percent_gain() {
        let r = percent_change(&[pt(0, 100.0), pt(1, 250.0), pt(2, 110.0)]).unwrap();
        assert!((r.pnl - 10.0).abs() < 1e-9);
        assert_eq!(r.first_value, 100.0);
        assert_eq!(r.last_value, 110.0);
        assert_eq!(r.first_timestamp, pt(0, 0.0).timestamp);
        assert_eq!(r.last_timestamp, pt(2, 0.0).timestamp);
    }

    #[test]
    fn test_loss_is_negative() {
        let r = percent_change(&[pt(0, 200.0), pt(1, 150.0)]).unwrap();
        assert!((r.pnl + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_uses_position_not_timestamp_order() {
        let r = percent_change(&[pt(10, 50.0), pt(0, 100.0)]).unwrap();
        assert_eq!(r.first_value, 50.0);
        assert!((r.pnl - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_zero_change() {
        let r = percent_change(&[pt(0, 42.0)]).unwrap();
        assert_eq!(r.pnl, 0.0);
    }

    #[test]
    fn test_zero_baseline_is_division_by_zero() {
        let err = percent_change(&[pt(0, 0.0), pt(1, 5.0)]).unwrap_err();
        assert!(matches!(err, PriceError::DivisionByZero(_)));
    }

    #[test]
    fn test_empty_is_invalid_input() {
        assert!(matches!(percent_change(&[]), Err(PriceError::InvalidInput(_))));
    }
}
