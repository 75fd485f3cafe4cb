//! Conversion between `HH:MM` clock strings and minutes since start of day.
//!
//! `"24:00"` is accepted as the exclusive end of the day (minute 1440), so a
//! range can be written as `"09:00".."24:00"`.

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SchedulerError};
use crate::time_range::DAY_LENGTH;

/// Parse `HH:MM` into minutes since start of day.
///
/// # Errors
/// Returns `SchedulerError::InvalidClock` if the string is not a valid 24-hour
/// clock time.
pub fn parse_clock(s: &str) -> Result<i32> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(DAY_LENGTH);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| SchedulerError::InvalidClock(format!("{trimmed}: {e}")))?;
    // Both components are bounded by chrono (hour < 24, minute < 60).
    Ok((time.hour() * 60 + time.minute()) as i32)
}

/// Format minutes since start of day as `HH:MM`.
///
/// Minute 1440 formats as `"24:00"`.
///
/// # Errors
/// Returns `SchedulerError::OutOfDay` for negative minutes or minutes past 1440.
pub fn format_clock(minutes: i32) -> Result<String> {
    if !(0..=DAY_LENGTH).contains(&minutes) {
        return Err(SchedulerError::OutOfDay(minutes));
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}
