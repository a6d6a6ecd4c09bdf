pub mod calendars;
pub mod events;
