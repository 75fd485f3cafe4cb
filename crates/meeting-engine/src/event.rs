//! Query inputs: calendar events and the meeting request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An occupied interval on the calendars of a set of attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display label. Never used for matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub time_range: TimeRange,
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(time_range: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            time_range,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A request to find room for a meeting of `duration` minutes.
///
/// An attendee listed as both mandatory and optional is treated as mandatory.
/// `duration` is not validated; a non-positive value makes every gap fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: i64,
    #[serde(default)]
    pub mandatory: BTreeSet<String>,
    #[serde(default)]
    pub optional: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(duration: i64, mandatory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
        }
    }

    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional.extend(optional.into_iter().map(Into::into));
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional.insert(attendee.into());
    }
}
