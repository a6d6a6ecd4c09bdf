//! Read events from a named calendar in the system calendar store.
//!
//! The crate is split along the native boundary:
//! - `native` queries a [`CalendarStore`] (EventKit on macOS) and flattens
//!   each event into a [`FlatEventRecord`] of six text fields
//! - `facade` decodes those records into typed [`Event`]s and hands every
//!   [`QueryResult`] back to its adapter exactly once
//!
//! ```no_run
//! let events = icalevents_core::events("Work")?;
//! for event in &events {
//!     println!("{} {}", event.start_date.format("%Y-%m-%d %H:%M"), event.title);
//! }
//! # Ok::<(), icalevents_core::EventsError>(())
//! ```

pub mod access;
pub mod adapter;
pub mod error;
pub mod event;
pub mod facade;
pub mod native;
pub mod record;
pub mod store;
pub mod window;

#[cfg(target_os = "macos")]
pub mod eventkit;

#[cfg(test)]
mod testing;

pub use access::{AccessGate, AccessState};
pub use adapter::{CalendarAdapter, ReleaseGuard};
pub use error::{EventsError, EventsResult};
pub use event::Event;
pub use facade::{calendar_titles, events, events_with};
pub use native::NativeAdapter;
pub use record::{FlatEventRecord, QueryResult};
pub use store::{CalendarStore, HostEvent};
pub use window::QueryWindow;
