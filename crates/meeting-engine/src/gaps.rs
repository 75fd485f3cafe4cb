//! Find the free gaps of a day around a merged occupied set.

use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY, WHOLE_DAY};

/// Compute the free ranges of at least `duration` minutes left over by
/// `occupied`.
///
/// `occupied` must already be sorted and non-overlapping (see
/// [`merge_ranges`](crate::merge::merge_ranges)). Busy bounds outside the day
/// are clamped to it, so every emitted range lies within [`WHOLE_DAY`]. The
/// trailing gap runs up to and including [`END_OF_DAY`].
pub fn free_ranges(occupied: &[TimeRange], duration: i64) -> Vec<TimeRange> {
    if occupied.is_empty() {
        return if duration <= i64::from(WHOLE_DAY.duration()) {
            vec![WHOLE_DAY]
        } else {
            Vec::new()
        };
    }

    let mut free = Vec::new();
    let mut cursor = START_OF_DAY;

    for busy in occupied {
        let busy_start = busy.start().clamp(START_OF_DAY, WHOLE_DAY.end());
        let busy_end = busy.end().clamp(START_OF_DAY, WHOLE_DAY.end());
        if i64::from(busy_start) - i64::from(cursor) >= duration {
            free.push(TimeRange::from_start_end(cursor, busy_start, false));
        }
        cursor = cursor.max(busy_end);
    }

    if i64::from(END_OF_DAY) - i64::from(cursor) + 1 >= duration {
        free.push(TimeRange::from_start_end(cursor, END_OF_DAY, true));
    }

    free
}
