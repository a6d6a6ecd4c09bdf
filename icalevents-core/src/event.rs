//! Typed calendar events handed to callers.

use chrono::{DateTime, Local, TimeDelta};
use serde::{Serialize, Serializer};

use crate::error::EventsResult;
use crate::record::{FlatEventRecord, parse_minutes, parse_timestamp};

/// A calendar event decoded from a flat record.
///
/// Text fields are empty when the host had no value. Dates are in the host
/// time zone at minute precision; `duration` keeps the sub-minute precision
/// the host reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub title: String,
    pub location: String,
    pub notes: String,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    #[serde(rename = "duration_minutes", serialize_with = "serialize_minutes")]
    pub duration: TimeDelta,
}

impl Event {
    pub fn from_record(record: &FlatEventRecord) -> EventsResult<Self> {
        Ok(Event {
            title: record.title.clone(),
            location: record.location.clone(),
            notes: record.notes.clone(),
            start_date: parse_timestamp(&record.start_date)?,
            end_date: parse_timestamp(&record.end_date)?,
            duration: parse_minutes(&record.duration)?,
        })
    }
}

fn serialize_minutes<S: Serializer>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    let seconds = duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9;
    serializer.serialize_f64(seconds / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventsError;
    use crate::testing::record;

    #[test]
    fn test_empty_text_fields_are_kept() {
        let event = Event::from_record(&record("", "2024-06-01 10:00", "2024-06-01 11:00", "60.000000")).unwrap();

        assert_eq!(event.title, "");
        assert_eq!(event.location, "");
        assert_eq!(event.notes, "");
        assert_eq!(event.duration, TimeDelta::hours(1));
    }

    #[test]
    fn test_fields_are_decoded() {
        let mut flat = record("Standup", "2024-06-03 09:00", "2024-06-03 10:30", "90.5");
        flat.location = "Room 4".to_string();
        flat.notes = "bring notes".to_string();

        let event = Event::from_record(&flat).unwrap();

        assert_eq!(event.title, "Standup");
        assert_eq!(event.location, "Room 4");
        assert_eq!(event.notes, "bring notes");
        assert_eq!(event.start_date.naive_local().to_string(), "2024-06-03 09:00:00");
        assert_eq!(event.end_date.naive_local().to_string(), "2024-06-03 10:30:00");
        assert_eq!(event.duration, TimeDelta::minutes(90) + TimeDelta::seconds(30));
    }

    #[test]
    fn test_bad_end_date_is_reported() {
        let err = Event::from_record(&record("x", "2024-06-03 09:00", "03/06/2024", "60")).unwrap_err();
        assert_eq!(
            err,
            EventsError::MalformedTimestamp {
                value: "03/06/2024".to_string()
            }
        );
    }

    #[test]
    fn test_serializes_duration_as_minutes() {
        let event = Event::from_record(&record("x", "2024-06-03 09:00", "2024-06-03 10:30", "90.5")).unwrap();

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["duration_minutes"], 90.5);
        assert_eq!(json["title"], "x");
    }
}
