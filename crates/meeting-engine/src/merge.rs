//! Collapse overlapping time ranges into a sorted, disjoint occupied set.

use crate::time_range::TimeRange;

/// Merge possibly-overlapping ranges into the minimal sorted set covering the
/// same minutes.
///
/// Only ranges that share a minute are merged. Ranges that merely touch
/// (`a.end == b.start`) stay separate, so the output is sorted by start and
/// pairwise non-overlapping but may contain adjacent neighbours. Zero-length
/// ranges occupy nothing and are dropped. Empty input gives empty output.
pub fn merge_ranges<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut sorted: Vec<TimeRange> = ranges
        .into_iter()
        .filter(|range| range.duration() > 0)
        .collect();
    sorted.sort();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if range.start() < last.end() {
                if range.end() > last.end() {
                    *last = TimeRange::from_start_end(last.start(), range.end(), false);
                }
                // Otherwise fully contained in `last`.
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
