//! Interval overlap and spacing detection.
//!
//! Both checks sort a copy of the accepted intervals by start (stable, so
//! ties keep proposal order) and scan adjacent pairs only. For overlap this
//! can under-count degenerate clusters where one interval fully contains a
//! later non-adjacent one: downstream penalty and feedback counts depend on
//! the adjacent-pair numbers, so this behavior is deliberate and must not be
//! replaced with a full pairwise scan.

use crate::models::event::Interval;

/// Report adjacent-pair overlaps among half-open minute intervals.
///
/// Returned pairs `(i, i + 1)` index the start-sorted interval list, not the
/// original proposal order. A pair is an overlap iff the earlier interval's
/// end is strictly greater than the later one's start.
pub fn find_overlaps(intervals: &[Interval]) -> Vec<(usize, usize)> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut overlaps = Vec::new();
    for i in 0..sorted.len().saturating_sub(1) {
        if sorted[i].end > sorted[i + 1].start {
            overlaps.push((i, i + 1));
        }
    }
    overlaps
}

/// True when no adjacent pair of the start-sorted intervals overlaps.
pub fn no_overlap(intervals: &[Interval]) -> bool {
    find_overlaps(intervals).is_empty()
}

/// Count adjacent gaps smaller than `min_gap` minutes.
///
/// Only gaps *between* consecutive accepted intervals are checked; the gap to
/// the day boundaries is intentionally not considered.
pub fn count_min_gap_violations(intervals: &[Interval], min_gap: i32) -> usize {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.start);

    let mut violations = 0;
    for pair in sorted.windows(2) {
        if pair[1].start - pair[0].end < min_gap {
            violations += 1;
        }
    }
    violations
}
