//! Error types for meeting-engine helpers.
//!
//! The availability query itself never fails. These errors only come from the
//! checked constructors and clock parsing that callers use to build inputs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("Minute {0} lies outside the day")]
    OutOfDay(i32),

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
