mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `icalevents_core=debug`).
const LOG_ENV: &str = "ICALEVENTS_LOG";

#[derive(Parser)]
#[command(name = "icalevents")]
#[command(about = "Read events from a calendar in the macOS Calendar store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events of a calendar, most recent first
    Events {
        /// Calendar title, matched exactly
        calendar: String,

        /// Print events as JSON
        #[arg(long)]
        json: bool,

        /// Only show the first N events
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List the titles of all event calendars
    Calendars,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            calendar,
            json,
            limit,
        } => commands::events::run(&calendar, json, limit),
        Commands::Calendars => commands::calendars::run(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
