//! Interval arithmetic for uptime: reporting span, merged length, percentage
//!
//! All arithmetic is exact over [`BigUint`]; nothing here can overflow.

use crate::constants::{MAX_PERCENTAGE, PERCENT_SCALE};
use crate::models::Interval;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Bounding envelope of a set of reports: `max(end) - min(start)`
///
/// Gaps between reports are not subtracted. Empty input yields zero.
pub fn reporting_span<'a, I>(intervals: I) -> BigUint
where
    I: IntoIterator<Item = &'a Interval>,
{
    let mut bounds: Option<(&BigUint, &BigUint)> = None;

    for interval in intervals {
        bounds = Some(match bounds {
            None => (interval.start(), interval.end()),
            Some((min_start, max_end)) => (
                min_start.min(interval.start()),
                max_end.max(interval.end()),
            ),
        });
    }

    match bounds {
        Some((min_start, max_end)) => max_end - min_start,
        None => BigUint::zero(),
    }
}

/// Total length of the union of the given intervals
///
/// Sort by `(start, end)` and sweep. Intervals that overlap or touch at an
/// endpoint fold into the current window.
pub fn merged_length(mut intervals: Vec<&Interval>) -> BigUint {
    intervals.sort_unstable();

    let mut sorted = intervals.into_iter();
    let Some(first) = sorted.next() else {
        return BigUint::zero();
    };

    let mut total = BigUint::zero();
    let mut window_start = first.start();
    let mut window_end = first.end();

    for interval in sorted {
        if interval.start() <= window_end {
            window_end = window_end.max(interval.end());
        } else {
            total += window_end - window_start;
            window_start = interval.start();
            window_end = interval.end();
        }
    }

    total + (window_end - window_start)
}

/// `floor(available * 100 / span)`, clamped to `[0, 100]`
///
/// A zero span yields 0.
pub fn uptime_percentage(available: &BigUint, span: &BigUint) -> u8 {
    if span.is_zero() {
        return 0;
    }

    let percentage = available * BigUint::from(PERCENT_SCALE) / span;
    if percentage > BigUint::from(MAX_PERCENTAGE) {
        return MAX_PERCENTAGE;
    }
    percentage.to_u8().unwrap_or(MAX_PERCENTAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: u64, end: u64) -> Interval {
        Interval::new(BigUint::from(start), BigUint::from(end)).unwrap()
    }

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn test_reporting_span_is_envelope() {
        let intervals = [iv(100000, 200000), iv(0, 50000)];
        assert_eq!(reporting_span(&intervals), big(200000));
        assert_eq!(reporting_span(&[] as &[Interval]), big(0));
    }

    #[test]
    fn test_merged_length_disjoint_and_overlapping() {
        let a = iv(0, 50000);
        let b = iv(100000, 200000);
        assert_eq!(merged_length(vec![&b, &a]), big(150000));

        let c = iv(0, 10);
        let d = iv(5, 20);
        let e = iv(6, 8);
        assert_eq!(merged_length(vec![&e, &d, &c]), big(20));
    }

    #[test]
    fn test_touching_intervals_merge() {
        let a = iv(0, 50000);
        let b = iv(50000, 100000);
        assert_eq!(merged_length(vec![&a, &b]), big(100000));
    }

    #[test]
    fn test_merged_length_empty() {
        assert_eq!(merged_length(Vec::new()), big(0));
    }

    #[test]
    fn test_uptime_percentage_floors() {
        assert_eq!(uptime_percentage(&big(100), &big(300)), 33);
        assert_eq!(uptime_percentage(&big(150000), &big(200000)), 75);
        assert_eq!(uptime_percentage(&big(199), &big(200)), 99);
        assert_eq!(uptime_percentage(&big(0), &big(200)), 0);
    }

    #[test]
    fn test_uptime_percentage_zero_span_and_clamp() {
        assert_eq!(uptime_percentage(&big(10), &big(0)), 0);
        assert_eq!(uptime_percentage(&big(500), &big(100)), 100);
    }

    #[test]
    fn test_arithmetic_beyond_64_bits() {
        let huge: BigUint = BigUint::from(1u8) << 200u32;
        let start = huge.clone();
        let mid = &huge + BigUint::from(u64::MAX);
        let end = &mid + BigUint::from(u64::MAX);

        let up = Interval::new(start.clone(), mid).unwrap();
        let all = Interval::new(start, end).unwrap();

        let span = reporting_span([&all]);
        let available = merged_length(vec![&up]);
        assert_eq!(available, BigUint::from(u64::MAX));
        assert_eq!(uptime_percentage(&available, &span), 50);
    }

    fn interval_strategy() -> impl Strategy<Value = Interval> {
        (0u64..10_000, 1u64..500).prop_map(|(start, len)| iv(start, start + len))
    }

    proptest! {
        /// Merged length does not depend on input order
        #[test]
        fn merged_length_permutation_invariant(
            intervals in prop::collection::vec(interval_strategy(), 0..30),
            seed in any::<u64>(),
        ) {
            let forward: Vec<&Interval> = intervals.iter().collect();
            let mut shuffled = forward.clone();
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
                shuffled.reverse();
            }
            prop_assert_eq!(merged_length(forward), merged_length(shuffled));
        }

        /// Inserting exact duplicates leaves the merged length unchanged
        #[test]
        fn merged_length_duplicate_idempotent(
            intervals in prop::collection::vec(interval_strategy(), 1..30),
        ) {
            let once: Vec<&Interval> = intervals.iter().collect();
            let twice: Vec<&Interval> = intervals.iter().chain(intervals.iter()).collect();
            prop_assert_eq!(merged_length(once), merged_length(twice));
        }

        /// Merged length never exceeds the envelope or the plain sum
        #[test]
        fn merged_length_bounded(
            intervals in prop::collection::vec(interval_strategy(), 1..30),
        ) {
            let merged = merged_length(intervals.iter().collect());
            let sum: BigUint = intervals.iter().map(Interval::length).sum();
            prop_assert!(merged <= reporting_span(&intervals));
            prop_assert!(merged <= sum);
        }

        /// Percentage always lands in [0, 100]
        #[test]
        fn percentage_in_range(available in any::<u64>(), span in any::<u64>()) {
            let percentage = uptime_percentage(&big(available), &big(span));
            prop_assert!(percentage <= 100);
        }
    }
}
