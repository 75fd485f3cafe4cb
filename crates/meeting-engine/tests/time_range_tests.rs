//! Tests for the `TimeRange` interval model.

use meeting_engine::{SchedulerError, TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
use std::cmp::Ordering;

fn span(start: i32, end: i32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn start_duration_and_start_end_agree() {
    let a = TimeRange::from_start_duration(60, 30);
    let b = TimeRange::from_start_end(60, 90, false);
    let c = TimeRange::from_start_end(60, 89, true);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.duration(), 30);
}

#[test]
fn inclusive_end_of_day_reaches_1440() {
    let evening = TimeRange::from_start_end(1200, END_OF_DAY, true);
    assert_eq!(evening.end(), 1440);
    assert_eq!(evening.duration(), 240);
    assert_eq!(WHOLE_DAY.start(), START_OF_DAY);
}

#[test]
fn checked_constructor_validates_bounds() {
    assert_eq!(
        TimeRange::try_from_start_end(90, 60, false),
        Err(SchedulerError::InvalidRange { start: 90, end: 60 })
    );
    assert_eq!(
        TimeRange::try_from_start_end(-1, 60, false),
        Err(SchedulerError::OutOfDay(-1))
    );
    assert_eq!(
        TimeRange::try_from_start_end(0, 1441, false),
        Err(SchedulerError::OutOfDay(1441))
    );
    assert_eq!(
        TimeRange::try_from_start_end(START_OF_DAY, END_OF_DAY, true),
        Ok(WHOLE_DAY)
    );
}

// ── Predicates ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_ranges_overlap_both_ways() {
    let a = span(60, 120);
    let b = span(90, 180);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn touching_ranges_do_not_overlap() {
    let a = span(60, 120);
    let b = span(120, 180);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn nested_range_overlaps_and_is_contained() {
    let outer = span(60, 240);
    let inner = span(90, 120);
    assert!(outer.overlaps(&inner));
    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
}

#[test]
fn range_contains_itself_and_its_edges() {
    let a = span(60, 120);
    assert!(a.contains(&a));
    assert!(a.contains(&span(60, 90)));
    assert!(a.contains(&span(90, 120)));
    assert!(!a.contains(&span(90, 121)));
}

#[test]
fn minute_membership_excludes_end() {
    let a = span(60, 120);
    assert!(a.contains_minute(60));
    assert!(a.contains_minute(119));
    assert!(!a.contains_minute(120));
    assert!(!a.contains_minute(59));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn natural_order_is_start_then_end() {
    let mut ranges = vec![span(120, 180), span(60, 240), span(60, 90)];
    ranges.sort();
    assert_eq!(ranges, vec![span(60, 90), span(60, 240), span(120, 180)]);
}

#[test]
fn end_order_is_end_then_start() {
    assert_eq!(span(0, 90).cmp_by_end(&span(60, 120)), Ordering::Less);
    assert_eq!(span(60, 120).cmp_by_end(&span(0, 120)), Ordering::Greater);

    let mut ranges = vec![span(60, 240), span(120, 180), span(0, 180)];
    ranges.sort_by(TimeRange::cmp_by_end);
    assert_eq!(ranges, vec![span(0, 180), span(120, 180), span(60, 240)]);
}
