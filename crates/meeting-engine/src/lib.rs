//! # meeting-engine
//!
//! Single-day meeting availability for a group of attendees.
//!
//! Given the day's calendar events and a meeting request (duration, mandatory
//! attendees, optional attendees), the engine computes every time range in
//! which the meeting fits. Slots that suit everyone are preferred; when the
//! optional attendees' schedules leave nothing, the engine falls back to
//! slots that suit the mandatory attendees alone.
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![
//!     Event::new(TimeRange::from_start_end(480, 540, false), ["A"]),
//!     Event::new(TimeRange::from_start_end(570, 630, false), ["B"]),
//! ];
//! let request = MeetingRequest::new(30, ["A", "B"]);
//!
//! let free = query(&events, &request);
//! assert_eq!(free.len(), 3);
//! assert_eq!(free[1], TimeRange::from_start_end(540, 570, false));
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — `TimeRange` and the day constants
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`filter`] — select events by attendee
//! - [`merge`] — merge overlapping ranges into a disjoint busy set
//! - [`gaps`] — free ranges around a busy set
//! - [`query`] — the mandatory/optional availability policy
//! - [`clock`] — `HH:MM` conversion helpers
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod filter;
pub mod gaps;
pub mod merge;
pub mod query;
pub mod time_range;

pub use clock::{format_clock, parse_clock};
pub use error::SchedulerError;
pub use event::{Event, MeetingRequest};
pub use filter::events_with_attendees;
pub use gaps::free_ranges;
pub use merge::merge_ranges;
pub use query::{busy_for, first_available, query, query_detailed, QueryReport, SlotPolicy};
pub use time_range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY, WHOLE_DAY};
