//! Select the events that involve a given group of attendees.

use std::collections::BTreeSet;

use crate::event::Event;

/// Return the events whose attendee set intersects `attendees`, in input order.
///
/// An event with no attendees never matches, and neither does anything when
/// `attendees` is empty.
pub fn events_with_attendees<'a>(
    events: &'a [Event],
    attendees: &BTreeSet<String>,
) -> Vec<&'a Event> {
    if attendees.is_empty() {
        return Vec::new();
    }
    events
        .iter()
        .filter(|event| event.attendees.iter().any(|a| attendees.contains(a)))
        .collect()
}
