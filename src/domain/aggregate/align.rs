//! Per-series lookup and linear interpolation onto arbitrary instants.

use crate::domain::price_history::Series;
use crate::shared::time::nanos_between;
use chrono::{DateTime, Utc};

/// The common window shared by every series, `None` when they don't intersect.
pub fn common_window(series: &[Series]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = series.iter().map(|s| s.first().timestamp).max()?;
    let end = series.iter().map(|s| s.last().timestamp).min()?;
    if start > end {
        return None;
    }
    Some((start, end))
}

/// Sorted `(timestamp, value)` knots of one series, restricted to a window.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLookup {
    knots: Vec<(DateTime<Utc>, f64)>,
}

impl SeriesLookup {
    /// Knots from `series` within `[start, end]`.
    ///
    /// A series that has no point inside the window but straddles it keeps
    /// the two points bracketing the window, so interpolation stays defined.
    pub fn within(series: &Series, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let points = series.points();
        let mut knots: Vec<(DateTime<Utc>, f64)> = points
            .iter()
            .filter(|p| p.timestamp >= start && p.timestamp <= end)
            .map(|p| (p.timestamp, p.value_f64()))
            .collect();

        if knots.is_empty() {
            let before = points.iter().rev().find(|p| p.timestamp < start);
            let after = points.iter().find(|p| p.timestamp > end);
            knots.extend(
                before
                    .into_iter()
                    .chain(after)
                    .map(|p| (p.timestamp, p.value_f64())),
            );
        }

        Self { knots }
    }

    pub fn from_knots(mut knots: Vec<(DateTime<Utc>, f64)>) -> Self {
        knots.sort_by_key(|k| k.0);
        Self { knots }
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// The knots surrounding `t`, clamped to the boundary knot outside the range.
    pub fn bracket(&self, t: DateTime<Utc>) -> Option<((DateTime<Utc>, f64), (DateTime<Utc>, f64))> {
        let first = *self.knots.first()?;
        let last = *self.knots.last()?;
        if t <= first.0 {
            return Some((first, first));
        }
        if t >= last.0 {
            return Some((last, last));
        }

        // First knot strictly after t; t > first.0 so idx >= 1.
        let idx = self.knots.partition_point(|k| k.0 <= t);
        let lo = self.knots[idx - 1];
        if lo.0 == t {
            return Some((lo, lo));
        }
        Some((lo, self.knots[idx]))
    }

    /// Linearly interpolated value at `t`. Exact at knots.
    pub fn value_at(&self, t: DateTime<Utc>) -> Option<f64> {
        let ((t_lo, v_lo), (t_hi, v_hi)) = self.bracket(t)?;
        Some(interpolate(t_lo, v_lo, t_hi, v_hi, t))
    }
}

/// `v_lo + (v_hi - v_lo) * (t - t_lo) / (t_hi - t_lo)`, or `v_lo` when `t_hi == t_lo`.
pub fn interpolate(
    t_lo: DateTime<Utc>,
    v_lo: f64,
    t_hi: DateTime<Utc>,
    v_hi: f64,
    t: DateTime<Utc>,
) -> f64 {
    if t_hi == t_lo {
        return v_lo;
    }
    let span = nanos_between(t_lo, t_hi);
    let offset = nanos_between(t_lo, t);
    v_lo + (v_hi - v_lo) * offset / span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::PricePoint;
    use crate::shared::{Interval, Symbol};
    use rust_decimal::Decimal;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    fn series(points: &[(i64, f64)]) -> Series {
        Series::new(
            Symbol::new("X").unwrap(),
            Interval::Short,
            points
                .iter()
                .map(|(t, v)| PricePoint::new(at(*t), Decimal::try_from(*v).unwrap()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert_eq!(interpolate(at(0), 10.0, at(10), 20.0, at(5)), 15.0);
        assert_eq!(interpolate(at(0), 10.0, at(10), 20.0, at(0)), 10.0);
        assert_eq!(interpolate(at(0), 10.0, at(10), 20.0, at(10)), 20.0);
    }

    #[test]
    fn test_interpolate_degenerate_returns_lo() {
        assert_eq!(interpolate(at(5), 7.0, at(5), 9.0, at(5)), 7.0);
    }

    #[test]
    fn test_exact_hit_is_exact() {
        let lookup = SeriesLookup::from_knots(vec![
            (at(0), 0.1),
            (at(7), 0.30000000000000004),
            (at(13), 123.456789),
        ]);
        assert_eq!(lookup.value_at(at(7)), Some(0.30000000000000004));
        assert_eq!(lookup.value_at(at(13)), Some(123.456789));
        assert_eq!(lookup.value_at(at(0)), Some(0.1));
    }

    #[test]
    fn test_clamps_outside_range() {
        let lookup = SeriesLookup::from_knots(vec![(at(10), 1.0), (at(20), 3.0)]);
        assert_eq!(lookup.value_at(at(0)), Some(1.0));
        assert_eq!(lookup.value_at(at(30)), Some(3.0));
        assert_eq!(lookup.value_at(at(15)), Some(2.0));
    }

    #[test]
    fn test_single_knot_is_constant() {
        let lookup = SeriesLookup::from_knots(vec![(at(10), 4.0)]);
        assert_eq!(lookup.value_at(at(0)), Some(4.0));
        assert_eq!(lookup.value_at(at(10)), Some(4.0));
        assert_eq!(lookup.value_at(at(99)), Some(4.0));
    }

    #[test]
    fn test_empty_lookup_has_no_value() {
        assert_eq!(SeriesLookup::from_knots(vec![]).value_at(at(0)), None);
    }

    #[test]
    fn test_common_window() {
        let a = series(&[(0, 1.0), (10, 1.0)]);
        let b = series(&[(5, 1.0), (30, 1.0)]);
        assert_eq!(common_window(&[a.clone(), b]), Some((at(5), at(10))));

        let c = series(&[(20, 1.0), (30, 1.0)]);
        assert_eq!(common_window(&[a, c]), None);
        assert_eq!(common_window(&[]), None);
    }

    #[test]
    fn test_within_restricts_to_window() {
        let s = series(&[(0, 1.0), (10, 2.0), (20, 3.0), (30, 4.0)]);
        let lookup = SeriesLookup::within(&s, at(5), at(25));
        assert_eq!(lookup.len(), 2);
        // 5 is before the first in-window knot (10) → clamped.
        assert_eq!(lookup.value_at(at(5)), Some(2.0));
        assert_eq!(lookup.value_at(at(25)), Some(3.0));
    }

    #[test]
    fn test_within_straddling_series_keeps_bracketing_points() {
        let s = series(&[(0, 0.0), (100, 10.0)]);
        let lookup = SeriesLookup::within(&s, at(40), at(60));
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.value_at(at(50)), Some(5.0));
    }

    #[test]
    fn test_sub_millisecond_knots_interpolate() {
        let lo = at(300) - chrono::TimeDelta::microseconds(200);
        let hi = at(300) + chrono::TimeDelta::microseconds(300);
        let lookup = SeriesLookup::from_knots(vec![(lo, 1.0), (hi, 2.0)]);

        let v = lookup.value_at(at(300)).unwrap();
        assert!((v - 1.4).abs() < 1e-12, "{v}");
        assert_eq!(interpolate(lo, 1.0, hi, 2.0, hi), 2.0);
    }
}
