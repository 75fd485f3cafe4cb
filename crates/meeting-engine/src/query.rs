//! The availability query: two-tier mandatory/optional scheduling policy.
//!
//! Mandatory attendees are a hard constraint. Optional attendees are honored
//! when at least one slot still fits; otherwise the mandatory-only answer is
//! returned. Every call is independent and allocation-local, so queries can
//! run concurrently over shared inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::event::{Event, MeetingRequest};
use crate::filter::events_with_attendees;
use crate::gaps::free_ranges;
use crate::merge::merge_ranges;
use crate::time_range::{TimeRange, WHOLE_DAY};

/// Which branch of the policy produced a [`QueryReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// The duration exceeds the day; nothing can fit.
    TooLong,
    /// No relevant attendee has any event; the whole day is free.
    NoConflicts,
    /// Only optional attendees have events, so their schedule decides.
    OptionalOnly,
    /// Optional attendees have no events; mandatory schedule decides.
    MandatoryOnly,
    /// Slots that suit mandatory attendees and every non-clashing optional event.
    Combined,
    /// Honoring optional attendees left nothing, so mandatory slots were used.
    FallbackToMandatory,
}

/// Full result of an availability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    /// Free ranges, sorted by start, each at least the requested duration.
    pub free: Vec<TimeRange>,
    /// Merged busy set of the mandatory attendees.
    pub mandatory_busy: Vec<TimeRange>,
    /// Merged busy set of the optional attendees.
    pub optional_busy: Vec<TimeRange>,
    pub policy: SlotPolicy,
}

/// Find every range of the day in which `request` could be scheduled.
///
/// Never fails: an unsatisfiable request yields an empty vector.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_detailed(events, request).free
}

/// Like [`query`], but also reports the busy sets and the policy branch taken.
pub fn query_detailed(events: &[Event], request: &MeetingRequest) -> QueryReport {
    let duration = request.duration;

    if duration > i64::from(WHOLE_DAY.duration()) {
        debug!(duration, "requested duration exceeds the day");
        return report(Vec::new(), Vec::new(), Vec::new(), SlotPolicy::TooLong);
    }

    let mandatory_events = events_with_attendees(events, &request.mandatory);
    let optional_events = events_with_attendees(events, &request.optional);

    if mandatory_events.is_empty() && optional_events.is_empty() {
        debug!("no attendee has a conflicting event");
        return report(vec![WHOLE_DAY], Vec::new(), Vec::new(), SlotPolicy::NoConflicts);
    }

    let mandatory_busy = occupied(&mandatory_events);
    let optional_busy = occupied(&optional_events);
    trace!(
        mandatory = mandatory_busy.len(),
        optional = optional_busy.len(),
        "merged busy sets"
    );

    // Decided on events, not on the merged set: a mandatory event that
    // occupies no minute of the day still makes the mandatory tier binding.
    if mandatory_events.is_empty() {
        debug!("only optional attendees have conflicts");
        let free = free_ranges(&optional_busy, duration);
        return report(free, mandatory_busy, optional_busy, SlotPolicy::OptionalOnly);
    }

    let mandatory_free = free_ranges(&mandatory_busy, duration);

    if optional_busy.is_empty() {
        return report(
            mandatory_free,
            mandatory_busy,
            optional_busy,
            SlotPolicy::MandatoryOnly,
        );
    }

    let combined_busy = combine(&mandatory_busy, &optional_busy);
    let combined_free = free_ranges(&combined_busy, duration);

    if combined_free.is_empty() {
        debug!("optional conflicts leave no slot, falling back to mandatory attendees");
        return report(
            mandatory_free,
            mandatory_busy,
            optional_busy,
            SlotPolicy::FallbackToMandatory,
        );
    }

    report(combined_free, mandatory_busy, optional_busy, SlotPolicy::Combined)
}

/// The earliest slot that fits `request`, trimmed to exactly its duration.
///
/// Returns `None` when nothing fits. A non-positive duration yields the
/// start minute of the first free range as a zero-length slot.
pub fn first_available(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    let first = query(events, request).into_iter().next()?;
    let length = i32::try_from(request.duration.max(0)).ok()?;
    Some(TimeRange::from_start_duration(first.start(), length))
}

/// Merged busy set of an arbitrary attendee group.
pub fn busy_for(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    occupied(&events_with_attendees(events, attendees))
}

/// Merged busy set of `events`, clipped to the day. Events entirely outside
/// the day are discarded.
fn occupied(events: &[&Event]) -> Vec<TimeRange> {
    merge_ranges(events.iter().filter_map(|e| e.time_range.clip_to_day()))
}

/// Mandatory busy set plus every optional range that clashes with none of it.
///
/// Optional ranges are tested against the mandatory set alone, never against each other.
fn combine(mandatory: &[TimeRange], optional: &[TimeRange]) -> Vec<TimeRange> {
    let kept = optional
        .iter()
        .filter(|opt| !mandatory.iter().any(|m| opt.overlaps(m)))
        .copied();
    merge_ranges(mandatory.iter().copied().chain(kept))
}

fn report(
    free: Vec<TimeRange>,
    mandatory_busy: Vec<TimeRange>,
    optional_busy: Vec<TimeRange>,
    policy: SlotPolicy,
) -> QueryReport {
    QueryReport {
        free,
        mandatory_busy,
        optional_busy,
        policy,
    }
}
