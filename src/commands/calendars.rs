use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let titles = icalevents_core::calendar_titles().context("Failed to list calendars")?;

    if titles.is_empty() {
        println!("{}", "No calendars found".dimmed());
        return Ok(());
    }

    for title in titles {
        println!("📅 {}", title);
    }

    Ok(())
}
