//! Flat records exchanged between the native adapter and the facade.
//!
//! Every field is text. Dates use a fixed minute-precision pattern in the host
//! time zone and durations are a decimal number of minutes, so the wire shape
//! stays a fixed six-field schema with no nested ownership.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone};

use crate::error::{EventsError, EventsResult};

/// Pattern used for `start_date` and `end_date` (`yyyy-MM-dd HH:mm`).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const NANOS_PER_MINUTE: i128 = 60_000_000_000;

/// Fraction digits beyond this cannot change the nanosecond value.
const MAX_FRACTION_DIGITS: usize = 18;

/// One event as it crosses the native boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatEventRecord {
    pub title: String,
    pub location: String,
    pub notes: String,
    pub start_date: String,
    pub end_date: String,
    /// Minutes between start and end, as a decimal string
    pub duration: String,
}

/// Outcome of a single adapter query.
///
/// Either an error message or the (possibly empty) list of records, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Error(String),
    Events(Vec<FlatEventRecord>),
}

impl QueryResult {
    pub fn error(message: impl Into<String>) -> Self {
        QueryResult::Error(message.into())
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryResult::Error(message) => Some(message),
            QueryResult::Events(_) => None,
        }
    }

    pub fn records(&self) -> &[FlatEventRecord] {
        match self {
            QueryResult::Error(_) => &[],
            QueryResult::Events(records) => records,
        }
    }

    pub fn count(&self) -> usize {
        self.records().len()
    }
}

pub fn format_timestamp(date: &DateTime<Local>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `yyyy-MM-dd HH:mm` timestamp in the host time zone.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
pub fn parse_timestamp(value: &str) -> EventsResult<DateTime<Local>> {
    let malformed = || EventsError::MalformedTimestamp {
        value: value.to_string(),
    };

    let naive = NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())?;
    Local.from_local_datetime(&naive).earliest().ok_or_else(malformed)
}

/// Format a span as minutes with six fraction digits (e.g. `90.500000`).
pub fn format_minutes(span: TimeDelta) -> String {
    let seconds = span.num_seconds() as f64 + f64::from(span.subsec_nanos()) / 1e9;
    format!("{:.6}", seconds / 60.0)
}

/// Parse a decimal number of minutes (e.g. `90.5`) into a span.
///
/// Accepts an optional sign, integer digits and an optional fraction. The
/// fraction is applied exactly down to the nanosecond.
pub fn parse_minutes(value: &str) -> EventsResult<TimeDelta> {
    let malformed = || EventsError::MalformedDuration {
        value: value.to_string(),
    };

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(malformed());
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let mut nanos: i128 = 0;
    for digit in whole.bytes() {
        nanos = nanos
            .checked_mul(10)
            .and_then(|n| n.checked_add(i128::from(digit - b'0')))
            .ok_or_else(malformed)?;
    }
    nanos = nanos.checked_mul(NANOS_PER_MINUTE).ok_or_else(malformed)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let numerator: i128 = fraction.parse().map_err(|_| malformed())?;
        let scale = 10_i128.pow(fraction.len() as u32);
        nanos = nanos
            .checked_add(numerator * NANOS_PER_MINUTE / scale)
            .ok_or_else(malformed)?;
    }

    if negative {
        nanos = -nanos;
    }

    let nanos = i64::try_from(nanos).map_err(|_| malformed())?;
    Ok(TimeDelta::nanoseconds(nanos))
}
