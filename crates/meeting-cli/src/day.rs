//! JSON day file: the events of one day plus the meeting request.
//!
//! Times are either `"HH:MM"` strings (`"24:00"` is the end of the day) or
//! integer minutes since midnight. Event ends are exclusive.

use anyhow::{Context, Result};
use meeting_engine::{format_clock, parse_clock, Event, MeetingRequest, TimeRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DayFile {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: RequestInput,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: Option<String>,
    pub start: ClockValue,
    pub end: ClockValue,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RequestInput {
    pub duration: i64,
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Minutes(i32),
    Clock(String),
}

impl ClockValue {
    fn minutes(&self) -> Result<i32> {
        match self {
            ClockValue::Minutes(m) => Ok(*m),
            ClockValue::Clock(s) => Ok(parse_clock(s)?),
        }
    }
}

/// A free or busy range as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

impl SlotDto {
    pub fn from_range(range: &TimeRange) -> Result<Self> {
        Ok(Self {
            start: format_clock(range.start())?,
            end: format_clock(range.end())?,
            duration_minutes: i64::from(range.duration()),
        })
    }
}

impl DayFile {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse day file")
    }

    /// Convert the file's events into engine events, validating every range.
    pub fn events(&self) -> Result<Vec<Event>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let label = input.title.clone().unwrap_or_else(|| format!("#{}", i + 1));
                let start = input
                    .start
                    .minutes()
                    .with_context(|| format!("Invalid start of event {label}"))?;
                let end = input
                    .end
                    .minutes()
                    .with_context(|| format!("Invalid end of event {label}"))?;
                let range = TimeRange::try_from_start_end(start, end, false)
                    .with_context(|| format!("Invalid time range of event {label}"))?;
                let event = Event::new(range, input.attendees.iter().cloned());
                Ok(match &input.title {
                    Some(title) => event.with_title(title.clone()),
                    None => event,
                })
            })
            .collect()
    }

    pub fn request(&self) -> MeetingRequest {
        MeetingRequest::new(self.request.duration, self.request.mandatory.iter().cloned())
            .with_optional(self.request.optional.iter().cloned())
    }
}
