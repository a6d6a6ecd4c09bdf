//! Test doubles for the adapter boundary and the host store.

use std::cell::Cell;

use chrono::TimeDelta;

use crate::access::AccessGate;
use crate::adapter::CalendarAdapter;
use crate::record::{FlatEventRecord, QueryResult, parse_timestamp};
use crate::store::{CalendarStore, HostEvent};
use crate::window::QueryWindow;

/// Number of separate allocations a native adapter makes for `result`.
///
/// One for the result itself, then either the error string or the record
/// array (when non-empty) plus each record and its six strings.
pub fn allocation_units(result: &QueryResult) -> usize {
    match result {
        QueryResult::Error(_) => 2,
        QueryResult::Events(records) if records.is_empty() => 1,
        QueryResult::Events(records) => 2 + records.len() * 7,
    }
}

/// Adapter returning a canned result and counting allocations and releases.
///
/// `releases` only grows when the result handed back is the one handed out,
/// intact; a truncated or substituted result adds nothing, so it shows up as
/// a gap against `allocations`. `release_calls` counts every call.
pub struct CountingAdapter {
    canned: QueryResult,
    allocations: Cell<usize>,
    releases: Cell<usize>,
    release_calls: Cell<usize>,
}

impl CountingAdapter {
    pub fn new(canned: QueryResult) -> Self {
        CountingAdapter {
            canned,
            allocations: Cell::new(0),
            releases: Cell::new(0),
            release_calls: Cell::new(0),
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self::new(QueryResult::error(message))
    }

    pub fn with_records(records: Vec<FlatEventRecord>) -> Self {
        Self::new(QueryResult::Events(records))
    }

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn releases(&self) -> usize {
        self.releases.get()
    }

    pub fn release_calls(&self) -> usize {
        self.release_calls.get()
    }
}

impl CalendarAdapter for CountingAdapter {
    fn load_calendar_named(&self, _name: &str) -> QueryResult {
        let result = self.canned.clone();
        self.allocations
            .set(self.allocations.get() + allocation_units(&result));
        result
    }

    fn release(&self, result: QueryResult) {
        self.release_calls.set(self.release_calls.get() + 1);
        if result == self.canned {
            self.releases
                .set(self.releases.get() + allocation_units(&result));
        }
    }
}

/// In-memory calendar store. Calendars are addressed by index.
pub struct MemoryStore {
    grant: bool,
    calendars: Vec<(String, Vec<HostEvent>)>,
    access_requests: Cell<usize>,
}

impl MemoryStore {
    pub fn granted() -> Self {
        MemoryStore {
            grant: true,
            calendars: Vec::new(),
            access_requests: Cell::new(0),
        }
    }

    pub fn denied() -> Self {
        MemoryStore {
            grant: false,
            ..Self::granted()
        }
    }

    pub fn with_calendar(mut self, title: &str, events: Vec<HostEvent>) -> Self {
        self.calendars.push((title.to_string(), events));
        self
    }

    pub fn access_requests(&self) -> usize {
        self.access_requests.get()
    }
}

impl CalendarStore for MemoryStore {
    type Calendar = usize;

    fn request_access(&self) -> bool {
        self.access_requests.set(self.access_requests.get() + 1);
        self.grant
    }

    fn calendars(&self) -> Vec<usize> {
        (0..self.calendars.len()).collect()
    }

    fn calendar_title(&self, calendar: &usize) -> String {
        self.calendars[*calendar].0.clone()
    }

    // Window matching belongs to the host; every stored event is returned.
    fn events_matching(&self, calendar: &usize, _window: &QueryWindow) -> Vec<HostEvent> {
        self.calendars[*calendar].1.clone()
    }
}

/// A gate private to one test, so access decisions don't leak between tests.
pub fn fresh_gate() -> &'static AccessGate {
    Box::leak(Box::new(AccessGate::new()))
}

pub fn host_event(title: &str, start: &str, minutes: i64) -> HostEvent {
    let start = parse_timestamp(start).unwrap();
    HostEvent {
        title: Some(title.to_string()),
        location: None,
        notes: None,
        start,
        end: start + TimeDelta::minutes(minutes),
    }
}

pub fn record(title: &str, start: &str, end: &str, duration: &str) -> FlatEventRecord {
    FlatEventRecord {
        title: title.to_string(),
        location: String::new(),
        notes: String::new(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        duration: duration.to_string(),
    }
}
