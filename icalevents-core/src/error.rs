//! Error types for calendar queries.

use thiserror::Error;

/// Message carried by an error result when calendar access was refused.
pub const ACCESS_DENIED_MESSAGE: &str = "calendar not accessible";

/// Message carried by an error result when no calendar matched the name.
pub const CALENDAR_NOT_FOUND_MESSAGE: &str = "calendar not found";

/// Errors that can occur while loading events from a calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventsError {
    #[error("Calendar access denied")]
    AccessDenied,

    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error("Malformed timestamp in event record: '{value}'")]
    MalformedTimestamp { value: String },

    #[error("Malformed duration in event record: '{value}'")]
    MalformedDuration { value: String },

    #[error("Calendar adapter error: {0}")]
    Adapter(String),

    #[error("Calendar access is only supported on macOS")]
    Unsupported,
}

impl EventsError {
    /// Decode the error text of a query result.
    ///
    /// `calendar` is the name that was queried, attached to not-found errors.
    pub fn from_adapter_message(message: &str, calendar: &str) -> Self {
        match message {
            ACCESS_DENIED_MESSAGE => EventsError::AccessDenied,
            CALENDAR_NOT_FOUND_MESSAGE => EventsError::CalendarNotFound(calendar.to_string()),
            other => EventsError::Adapter(other.to_string()),
        }
    }
}

/// Result type alias for calendar queries.
pub type EventsResult<T> = Result<T, EventsError>;
