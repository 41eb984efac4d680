//! Time helpers for request windows and regular timelines.

use chrono::{DateTime, TimeDelta, Utc};

/// `[now - window, now]` for a lookback request.
pub fn lookback_window(now: DateTime<Utc>, window: TimeDelta) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - window, now)
}

/// Instants `start, start + step, …` up to and including `end`.
///
/// Never emits a point past `end`. A non-positive step yields only `start`.
pub fn regular_timeline(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: TimeDelta,
) -> Vec<DateTime<Utc>> {
    if start > end {
        return Vec::new();
    }
    if step <= TimeDelta::zero() {
        return vec![start];
    }

    let span_ms = (end - start).num_milliseconds();
    let step_ms = step.num_milliseconds().max(1);
    let count = (span_ms / step_ms) as usize + 1;

    let mut out = Vec::with_capacity(count);
    let mut t = start;
    while t <= end {
        out.push(t);
        t += step;
    }
    out
}

/// Signed nanoseconds between two instants, as `f64` for interpolation.
///
/// Full precision for spans up to ~292 years; beyond that falls back to
/// millisecond resolution.
pub fn nanos_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(n) => n as f64,
        None => delta.num_milliseconds() as f64 * 1e6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_timeline_includes_both_ends_when_aligned() {
        let tl = regular_timeline(at(0), at(600), TimeDelta::seconds(300));
        assert_eq!(tl, vec![at(0), at(300), at(600)]);
    }

    #[test]
    fn test_timeline_stops_before_end() {
        let tl = regular_timeline(at(0), at(700), TimeDelta::seconds(300));
        assert_eq!(tl, vec![at(0), at(300), at(600)]);
    }

    #[test]
    fn test_timeline_single_point_window() {
        let tl = regular_timeline(at(50), at(50), TimeDelta::seconds(300));
        assert_eq!(tl, vec![at(50)]);
    }

    #[test]
    fn test_timeline_empty_when_inverted() {
        assert!(regular_timeline(at(10), at(0), TimeDelta::seconds(1)).is_empty());
    }

    #[test]
    fn test_nanos_between_keeps_sub_millisecond_precision() {
        let from = at(300);
        let to = from + TimeDelta::nanoseconds(500_250);
        assert_eq!(nanos_between(from, to), 500_250.0);
        assert_eq!(nanos_between(to, from), -500_250.0);
        assert_eq!(nanos_between(from, at(301)), 1e9);
    }

    #[test]
    fn test_lookback_window() {
        let (s, e) = lookback_window(at(86_400), TimeDelta::seconds(86_400));
        assert_eq!(s, at(0));
        assert_eq!(e, at(86_400));
    }

    #[test]
    fn test_nanos_between_whole_seconds() {
        assert_eq!(nanos_between(at(0), at(2)), 2e9);
        assert_eq!(nanos_between(at(2), at(0)), -2e9);
    }
}
