//! Wall-clock duration of a plan and small time helpers.

use std::collections::BTreeMap;

use jiff::civil::{self, Time};

use crate::models::Step;

pub(crate) const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes needed to run the steps, with each parallel group finishing when
/// its slowest member finishes.
///
/// Steps without an assigned group count as group 0.
///
/// ```rust
/// use batchcook_core::{schedule::total_duration, Step};
///
/// let steps = vec![
///     Step::new("Roast", 60).scheduled(0, 1),
///     Step::new("Chop", 15).scheduled(0, 2),
///     Step::new("Blend", 10).scheduled(1, 3),
/// ];
/// assert_eq!(total_duration(&steps), 70);
/// assert_eq!(total_duration(&[]), 0);
/// ```
pub fn total_duration(steps: &[Step]) -> u32 {
    let mut longest: BTreeMap<u32, u32> = BTreeMap::new();
    for step in steps {
        let slot = longest.entry(step.group_or_default()).or_insert(0);
        *slot = (*slot).max(step.duration_minutes);
    }
    longest.values().sum()
}

/// Minutes needed when every step runs after the previous one.
///
/// This is the naive baseline time savings are measured against.
pub fn sequential_duration(steps: &[Step]) -> u32 {
    steps.iter().map(|s| s.duration_minutes).sum()
}

/// Share of `raw` saved by running in `optimized` minutes, in percent.
/// Returns 0 when `raw` is 0.
pub fn time_saved_pct(raw: u32, optimized: u32) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    (f64::from(raw) - f64::from(optimized)) / f64::from(raw) * 100.0
}

/// Time of day `duration_minutes` after `start`, wrapping past midnight.
pub fn estimate_end_time(start: Time, duration_minutes: u32) -> Time {
    offset_time(start, i64::from(duration_minutes))
}

/// Time of day `minutes` after `start`, wrapping in both directions.
pub(crate) fn offset_time(start: Time, minutes: i64) -> Time {
    let total = (minutes_of_day(start) + minutes).rem_euclid(MINUTES_PER_DAY);
    // Both components are in range after rem_euclid.
    civil::time(
        (total / 60) as i8,
        (total % 60) as i8,
        start.second(),
        start.subsec_nanosecond(),
    )
}

/// Minutes elapsed since midnight.
pub(crate) fn minutes_of_day(time: Time) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Formats minutes the way the kitchen screens show them: `"45 min"`,
/// `"1h"`, `"2h05"`.
///
/// ```rust
/// use batchcook_core::schedule::format_duration;
///
/// assert_eq!(format_duration(45), "45 min");
/// assert_eq!(format_duration(60), "1h");
/// assert_eq!(format_duration(90), "1h30");
/// assert_eq!(format_duration(125), "2h05");
/// ```
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let (hours, rest) = (minutes / 60, minutes % 60);
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h{rest:02}")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_unassigned_steps_share_group_zero() {
        let steps = vec![Step::new("a", 10), Step::new("b", 25)];
        assert_eq!(total_duration(&steps), 25);
        assert_eq!(sequential_duration(&steps), 35);
    }

    #[test]
    fn test_groups_sum_their_longest_member() {
        let steps = vec![
            Step::new("a", 40).scheduled(0, 1),
            Step::new("b", 10).scheduled(0, 2),
            Step::new("c", 5).scheduled(1, 3),
            Step::new("d", 20).scheduled(2, 4),
        ];
        assert_eq!(total_duration(&steps), 65);
    }

    #[test]
    fn test_time_saved_pct() {
        assert_eq!(time_saved_pct(0, 0), 0.0);
        assert_eq!(time_saved_pct(100, 75), 25.0);
        assert_eq!(time_saved_pct(80, 80), 0.0);
    }

    #[test]
    fn test_estimate_end_time_same_day() {
        assert_eq!(estimate_end_time(time(10, 0, 0, 0), 95), time(11, 35, 0, 0));
    }

    #[test]
    fn test_estimate_end_time_wraps_past_midnight() {
        assert_eq!(estimate_end_time(time(23, 30, 0, 0), 45), time(0, 15, 0, 0));
        assert_eq!(estimate_end_time(time(22, 0, 0, 0), 3 * 1440), time(22, 0, 0, 0));
    }

    #[test]
    fn test_format_duration_edges() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(59), "59 min");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(61), "1h01");
    }
}
