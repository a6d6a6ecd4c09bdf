//! The host calendar framework, seen from the adapter.

use chrono::{DateTime, Local};

use crate::window::QueryWindow;

const MAX_SUBSEC_NANOS: u32 = 999_999_999;

/// An event as the host store reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEvent {
    pub title: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Calendar storage provided by the operating system.
///
/// Implementations own permission prompts, event storage and predicate
/// matching, including expansion of recurring events into occurrences.
pub trait CalendarStore {
    type Calendar;

    /// Ask the host for access to events, blocking until it answers.
    fn request_access(&self) -> bool;

    /// All calendars that hold events (not reminders).
    fn calendars(&self) -> Vec<Self::Calendar>;

    fn calendar_title(&self, calendar: &Self::Calendar) -> String;

    /// Events on `calendar` whose span intersects `window`, in no particular order.
    fn events_matching(&self, calendar: &Self::Calendar, window: &QueryWindow) -> Vec<HostEvent>;
}

/// Convert fractional seconds since the Unix epoch into a host-zone instant.
///
/// Sub-second parts that round up to a full second are clamped, so the result
/// never lands on a leap-second representation.
pub fn local_from_unix_seconds(interval: f64) -> DateTime<Local> {
    let seconds = interval.floor();
    let nanos = (((interval - seconds) * 1e9) as u32).min(MAX_SUBSEC_NANOS);

    DateTime::from_timestamp(seconds as i64, nanos)
        .map(|utc| utc.with_timezone(&Local))
        .unwrap_or_default()
}
