//! Entry points that turn adapter results into typed events.

use crate::adapter::{CalendarAdapter, ReleaseGuard};
use crate::error::{EventsError, EventsResult};
use crate::event::Event;

/// Load the events of the calendar titled `calendar_name` from `adapter`.
///
/// Events come back most recent first. Any error (including a single record
/// that fails to decode) discards everything decoded so far. The adapter's
/// result is released exactly once on every path.
pub fn events_with<A: CalendarAdapter + ?Sized>(
    adapter: &A,
    calendar_name: &str,
) -> EventsResult<Vec<Event>> {
    let result = ReleaseGuard::load(adapter, calendar_name);

    if let Some(message) = result.error_message() {
        return Err(EventsError::from_adapter_message(message, calendar_name));
    }

    result.records().iter().map(Event::from_record).collect()
}

/// Load the events of the calendar titled `calendar_name` from the system store.
///
/// The first call may show the host's calendar permission prompt and blocks
/// until it is answered.
#[cfg(target_os = "macos")]
pub fn events(calendar_name: &str) -> EventsResult<Vec<Event>> {
    let adapter = crate::native::NativeAdapter::new(crate::eventkit::EventKitStore::new());
    events_with(&adapter, calendar_name)
}

#[cfg(not(target_os = "macos"))]
pub fn events(_calendar_name: &str) -> EventsResult<Vec<Event>> {
    Err(EventsError::Unsupported)
}

/// Titles of the event calendars in the system store.
#[cfg(target_os = "macos")]
pub fn calendar_titles() -> EventsResult<Vec<String>> {
    crate::native::NativeAdapter::new(crate::eventkit::EventKitStore::new()).calendar_titles()
}

#[cfg(not(target_os = "macos"))]
pub fn calendar_titles() -> EventsResult<Vec<String>> {
    Err(EventsError::Unsupported)
}
