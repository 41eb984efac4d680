//! Batch snapshot domain: latest value per symbol under one timestamp.
//!
//! The reported timestamp is the freshest of the per-symbol latest
//! timestamps. Values are each symbol's own latest point, so when series are
//! not equally fresh the snapshot mixes slightly different instants. This is
//! an approximation; nothing is interpolated.

pub mod client;

use crate::domain::price_history::Series;
use crate::error::PriceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Latest value per symbol, keyed by lower-cased ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSnapshot {
    pub values: BTreeMap<String, f64>,
    pub timestamp: DateTime<Utc>,
}

/// Build a snapshot from already-loaded series.
pub fn snapshot<'a, I>(series: I) -> Result<BatchSnapshot, PriceError>
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut values = BTreeMap::new();
    let mut timestamp: Option<DateTime<Utc>> = None;

    for s in series {
        let latest = s.last();
        values.insert(s.symbol().to_key(), latest.value_f64());
        timestamp = Some(match timestamp {
            Some(t) if t >= latest.timestamp => t,
            _ => latest.timestamp,
        });
    }

    let timestamp = timestamp
        .ok_or_else(|| PriceError::InvalidInput("No symbols for snapshot".to_string()))?;
    Ok(BatchSnapshot { values, timestamp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::PricePoint;
    use crate::shared::{Interval, Symbol};
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    fn series(symbol: &str, points: &[(i64, i64)]) -> Series {
        Series::new(
            Symbol::new(symbol).unwrap(),
            Interval::Short,
            points
                .iter()
                .map(|(t, v)| PricePoint::new(at(*t), Decimal::from(*v)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_timestamp_is_freshest_latest() {
        let a = series("A", &[(50, 8), (100, 10)]);
        let b = series("B", &[(40, 4), (90, 5)]);
        let snap = snapshot([&a, &b]).unwrap();
        assert_eq!(snap.timestamp, at(100));
        assert_eq!(snap.values.get("a"), Some(&10.0));
        assert_eq!(snap.values.get("b"), Some(&5.0));
    }

    #[test]
    fn test_keys_are_lowercase() {
        let map: HashMap<&str, Series> = [("ETH", series("Eth", &[(0, 1)]))].into_iter().collect();
        let snap = snapshot(map.values()).unwrap();
        assert!(snap.values.contains_key("eth"));
        assert!(!snap.values.contains_key("ETH"));
    }

    #[test]
    fn test_latest_is_last_by_order() {
        let s = series("X", &[(300, 3), (100, 1), (200, 2)]);
        let snap = snapshot([&s]).unwrap();
        assert_eq!(snap.values["x"], 3.0);
        assert_eq!(snap.timestamp, at(300));
    }

    #[test]
    fn test_empty_is_invalid_input() {
        let none: Vec<Series> = vec![];
        assert!(matches!(snapshot(&none), Err(PriceError::InvalidInput(_))));
    }

    #[test]
    fn test_serializes_for_boundary() {
        let snap = snapshot([&series("BTC", &[(0, 2)])]).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["values"]["btc"], 2.0);
        assert_eq!(json["timestamp"], "1970-01-01T00:00:00Z");
    }
}
