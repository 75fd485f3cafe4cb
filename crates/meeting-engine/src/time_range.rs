//! The interval model: a half-open span of minutes within a single day.
//!
//! A `TimeRange` covers `[start, end)`. The last schedulable minute of the day
//! is [`END_OF_DAY`]; constructing with `inclusive_end = true` turns that into
//! the exclusive bound `END_OF_DAY + 1`, so [`WHOLE_DAY`] spans 1440 minutes.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::format_clock;
use crate::error::{Result, SchedulerError};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: i32 = 24 * 60 - 1;

/// Number of minutes in the modeled day.
pub const DAY_LENGTH: i32 = END_OF_DAY - START_OF_DAY + 1;

/// The whole day, `[START_OF_DAY, END_OF_DAY]` inclusive.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: END_OF_DAY + 1,
};

/// An immutable span of minutes, `[start, end)`.
///
/// Field order matters: the derived `Ord` sorts by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// Build a range from a start minute and a length in minutes.
    pub const fn from_start_duration(start: i32, duration: i32) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Build a range from two bounds. With `inclusive_end` the `end` minute
    /// itself belongs to the range.
    ///
    /// No validation happens here; see [`TimeRange::try_from_start_end`].
    pub const fn from_start_end(start: i32, end: i32, inclusive_end: bool) -> Self {
        Self {
            start,
            end: if inclusive_end { end + 1 } else { end },
        }
    }

    /// Checked variant of [`TimeRange::from_start_end`].
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidRange` if the range would end before it
    /// starts, and `SchedulerError::OutOfDay` if either bound leaves the day.
    pub fn try_from_start_end(start: i32, end: i32, inclusive_end: bool) -> Result<Self> {
        let range = Self::from_start_end(start, end, inclusive_end);
        if range.start > range.end {
            return Err(SchedulerError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.start < START_OF_DAY {
            return Err(SchedulerError::OutOfDay(range.start));
        }
        if range.end > WHOLE_DAY.end {
            return Err(SchedulerError::OutOfDay(range.end));
        }
        Ok(range)
    }

    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Exclusive end minute.
    pub const fn end(&self) -> i32 {
        self.end
    }

    pub const fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// True when both ranges share at least one minute.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// True when `minute` falls inside `[start, end)`.
    pub fn contains_minute(&self, minute: i32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// The part of this range inside [`WHOLE_DAY`], or `None` when no minute of
    /// it falls within the day.
    pub fn clip_to_day(&self) -> Option<TimeRange> {
        let start = self.start.max(WHOLE_DAY.start);
        let end = self.end.min(WHOLE_DAY.end);
        (start < end).then_some(TimeRange { start, end })
    }

    /// Ordering by end, then by start. The natural `Ord` sorts by start first.
    pub fn cmp_by_end(&self, other: &TimeRange) -> Ordering {
        self.end
            .cmp(&other.end)
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (format_clock(self.start), format_clock(self.end)) {
            (Ok(start), Ok(end)) => write!(f, "[{start}, {end})"),
            _ => write!(f, "[{}, {})", self.start, self.end),
        }
    }
}
