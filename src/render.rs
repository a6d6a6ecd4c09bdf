//! Terminal formatting for decoded events.

use chrono::{DateTime, Local, TimeDelta};

/// Format a date as a human-readable label (e.g. "Today", "Yesterday", "Wed Feb 25 2025")
pub fn format_date_label(date: &DateTime<Local>) -> String {
    let today = Local::now().date_naive();
    let date = date.date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Format the time of day, right-aligned (e.g. "  15:00")
pub fn format_time(date: &DateTime<Local>) -> String {
    format!("{:>7}", date.format("%H:%M"))
}

/// Format a span compactly (e.g. "1h 30m", "45m", "2d", "30s")
pub fn format_duration(span: TimeDelta) -> String {
    let total_seconds = span.num_seconds().abs();
    let sign = if span < TimeDelta::zero() { "-" } else { "" };

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m"), (seconds, "s")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        return "0m".to_string();
    }

    format!("{sign}{}", parts.join(" "))
}
