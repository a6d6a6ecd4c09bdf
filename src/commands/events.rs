use anyhow::{Context, Result};
use icalevents_core::{Event, EventsError};
use owo_colors::OwoColorize;

use crate::render::{format_date_label, format_duration, format_time};
use crate::utils::tui::create_spinner;

pub fn run(calendar: &str, json: bool, limit: Option<usize>) -> Result<()> {
    let spinner = (!json).then(|| create_spinner(format!("Loading {}", calendar)));
    let result = icalevents_core::events(calendar);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let mut events = match result {
        Err(EventsError::CalendarNotFound(name)) => {
            tracing::debug!(calendar = %name, "calendar not found, listing available titles");
            let available = icalevents_core::calendar_titles().unwrap_or_default();
            anyhow::bail!(
                "Calendar '{}' not found. Available: {}",
                name,
                available.join(", ")
            );
        }
        other => other.with_context(|| format!("Failed to load events from '{}'", calendar))?,
    };

    tracing::debug!(calendar, count = events.len(), "loaded events");

    if let Some(limit) = limit {
        events.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    print_events(&events);
    Ok(())
}

/// Print events grouped by day, keeping their order.
fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    let mut current_date: Option<String> = None;

    for event in events {
        let date_label = format_date_label(&event.start_date);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let title = if event.title.is_empty() {
            "(No title)"
        } else {
            event.title.as_str()
        };
        let duration = format!("({})", format_duration(event.duration));

        if event.location.is_empty() {
            println!("  {} {} {}", format_time(&event.start_date), title, duration.dimmed());
        } else {
            let location = format!("@ {}", event.location);
            println!(
                "  {} {} {} {}",
                format_time(&event.start_date),
                title,
                location.dimmed(),
                duration.dimmed()
            );
        }
    }
}
