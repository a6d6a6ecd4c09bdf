//! Adapter that queries a host calendar store and flattens its events.

use crate::access::{AccessGate, AccessState};
use crate::adapter::CalendarAdapter;
use crate::error::{ACCESS_DENIED_MESSAGE, CALENDAR_NOT_FOUND_MESSAGE, EventsError, EventsResult};
use crate::record::{FlatEventRecord, QueryResult, format_minutes, format_timestamp};
use crate::store::{CalendarStore, HostEvent};
use crate::window::QueryWindow;

pub struct NativeAdapter<S> {
    store: S,
    gate: &'static AccessGate,
}

impl<S: CalendarStore> NativeAdapter<S> {
    /// Adapter sharing the process-wide access decision.
    pub fn new(store: S) -> Self {
        Self::with_gate(store, AccessGate::process())
    }

    pub fn with_gate(store: S, gate: &'static AccessGate) -> Self {
        NativeAdapter { store, gate }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make sure the host granted access, prompting at most once per gate.
    pub fn ensure_access(&self) -> EventsResult<()> {
        match self.gate.ensure(|| self.store.request_access()) {
            AccessState::Granted => Ok(()),
            _ => Err(EventsError::AccessDenied),
        }
    }

    /// Find the event calendar titled exactly `name`.
    ///
    /// When several calendars share the title, the last one listed wins.
    pub fn resolve_calendar(&self, name: &str) -> EventsResult<S::Calendar> {
        let mut found = None;
        let mut matches = 0usize;

        for calendar in self.store.calendars() {
            if self.store.calendar_title(&calendar) == name {
                matches += 1;
                found = Some(calendar);
            }
        }

        if matches > 1 {
            tracing::warn!(
                calendar = name,
                matches,
                "several calendars share this title, using the last one"
            );
        }

        found.ok_or_else(|| EventsError::CalendarNotFound(name.to_string()))
    }

    /// Events of `calendar` within `window`, most recent start first.
    pub fn query_events(&self, calendar: &S::Calendar, window: &QueryWindow) -> Vec<HostEvent> {
        let mut events = self.store.events_matching(calendar, window);
        events.sort_by(|a, b| b.start.cmp(&a.start));
        events
    }

    /// Titles of every event calendar, after ensuring access.
    pub fn calendar_titles(&self) -> EventsResult<Vec<String>> {
        self.ensure_access()?;

        Ok(self
            .store
            .calendars()
            .iter()
            .map(|calendar| self.store.calendar_title(calendar))
            .collect())
    }

    fn try_load(&self, name: &str) -> EventsResult<Vec<FlatEventRecord>> {
        self.ensure_access()?;
        let calendar = self.resolve_calendar(name)?;

        let window = QueryWindow::current();
        let events = self.query_events(&calendar, &window);
        tracing::debug!(calendar = name, count = events.len(), "fetched events");

        Ok(serialize(&events))
    }
}

impl<S: CalendarStore> CalendarAdapter for NativeAdapter<S> {
    fn load_calendar_named(&self, name: &str) -> QueryResult {
        match self.try_load(name) {
            Ok(records) => QueryResult::Events(records),
            Err(EventsError::AccessDenied) => QueryResult::error(ACCESS_DENIED_MESSAGE),
            Err(EventsError::CalendarNotFound(_)) => QueryResult::error(CALENDAR_NOT_FOUND_MESSAGE),
            Err(other) => QueryResult::error(other.to_string()),
        }
    }

    fn release(&self, result: QueryResult) {
        tracing::trace!(count = result.count(), "releasing query result");
        drop(result);
    }
}

/// Flatten host events into boundary records, keeping their order.
pub fn serialize(events: &[HostEvent]) -> Vec<FlatEventRecord> {
    events.iter().map(flatten).collect()
}

fn flatten(event: &HostEvent) -> FlatEventRecord {
    FlatEventRecord {
        title: event.title.clone().unwrap_or_default(),
        location: event.location.clone().unwrap_or_default(),
        notes: event.notes.clone().unwrap_or_default(),
        start_date: format_timestamp(&event.start),
        end_date: format_timestamp(&event.end),
        duration: format_minutes(event.end - event.start),
    }
}
