//! EventKit-backed calendar store (macOS).

use std::sync::mpsc;

use block2::RcBlock;
use chrono::{DateTime, Local};
use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::Bool;
use objc2_event_kit::{EKCalendar, EKEntityType, EKEvent, EKEventStore};
use objc2_foundation::{NSArray, NSDate, NSError, NSString};

use crate::store::{CalendarStore, HostEvent, local_from_unix_seconds};
use crate::window::QueryWindow;

pub struct EventKitStore {
    store: Retained<EKEventStore>,
}

impl EventKitStore {
    pub fn new() -> Self {
        tracing::info!("init event store");
        EventKitStore {
            store: unsafe { EKEventStore::new() },
        }
    }
}

impl Default for EventKitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarStore for EventKitStore {
    type Calendar = Retained<EKCalendar>;

    fn request_access(&self) -> bool {
        let (sender, receiver) = mpsc::channel();
        let completion = RcBlock::new(move |granted: Bool, _error: *mut NSError| {
            let _ = sender.send(granted.as_bool());
        });

        // EventKit copies the block and calls it once on one of its own queues.
        #[allow(deprecated)]
        unsafe {
            self.store
                .requestAccessToEntityType_completion(EKEntityType::Event, RcBlock::as_ptr(&completion));
        }

        receiver.recv().unwrap_or(false)
    }

    fn calendars(&self) -> Vec<Retained<EKCalendar>> {
        unsafe { self.store.calendarsForEntityType(EKEntityType::Event) }.to_vec()
    }

    fn calendar_title(&self, calendar: &Retained<EKCalendar>) -> String {
        unsafe { calendar.title() }.to_string()
    }

    fn events_matching(&self, calendar: &Retained<EKCalendar>, window: &QueryWindow) -> Vec<HostEvent> {
        let start = to_nsdate(&window.start);
        let end = to_nsdate(&window.end);
        let calendars = NSArray::from_retained_slice(&[calendar.clone()]);

        let events = unsafe {
            let predicate = self
                .store
                .predicateForEventsWithStartDate_endDate_calendars(&start, &end, Some(&*calendars));
            self.store.eventsMatchingPredicate(&predicate)
        };

        events.iter().map(|event| to_host_event(&event)).collect()
    }
}

fn to_host_event(event: &EKEvent) -> HostEvent {
    unsafe {
        // The binding types `title` as non-null, but EventKit returns nil for untitled events.
        let title: Option<Retained<NSString>> = msg_send![event, title];

        HostEvent {
            title: title.map(|s| s.to_string()),
            location: event.location().map(|s| s.to_string()),
            notes: event.notes().map(|s| s.to_string()),
            start: from_nsdate(&event.startDate()),
            end: from_nsdate(&event.endDate()),
        }
    }
}

fn to_nsdate(date: &DateTime<Local>) -> Retained<NSDate> {
    let seconds = date.timestamp() as f64 + f64::from(date.timestamp_subsec_nanos()) / 1e9;
    NSDate::dateWithTimeIntervalSince1970(seconds)
}

fn from_nsdate(date: &NSDate) -> DateTime<Local> {
    local_from_unix_seconds(date.timeIntervalSince1970())
}
