//! `cadence` CLI — check proposed activities against a weekly schedule file.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a new activity (request JSON on stdin)
//! echo '{"title":"Yoga","category":"fitness","dayOfWeek":"Monday",
//!        "timeSlot":"09:00","durationMinutes":60}' | cadence check -s week.json
//!
//! # Validate from a file
//! cadence check -s week.json -i request.json
//!
//! # Validate an edit to an existing activity
//! cadence update 6f2cfe8e-41b1-4c5e-b6b3-5f8c3a2d9e01 -s week.json -i changes.json
//!
//! # List free windows on a day
//! cadence free -s week.json -d Monday --from 08:00 --to 18:00
//! ```
//!
//! `check` and `update` print the decision as JSON; a rejected request also
//! sets a non-zero exit code so scripts can branch on it.

use anyhow::{Context, Result};
use cadence_engine::activity::{parse_weekday, Activity, ActivityId};
use cadence_engine::validate::{CreateDecision, CreateRequest, UpdateDecision, UpdateRequest};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "cadence", version, about = "Weekly activity schedule checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a new-activity request against the schedule
    Check {
        /// Schedule file (JSON array of activities)
        #[arg(short, long)]
        schedule: String,
        /// Request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Check an edit to an existing activity
    Update {
        /// Id of the activity being edited
        id: String,
        /// Schedule file (JSON array of activities)
        #[arg(short, long)]
        schedule: String,
        /// Request file with the changed fields (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List free windows on one day of the week
    Free {
        /// Schedule file (JSON array of activities)
        #[arg(short, long)]
        schedule: String,
        /// Day of week ("Monday".."Sunday")
        #[arg(short, long)]
        day: String,
        /// Window start, "HH:MM"
        #[arg(long, default_value = "06:00")]
        from: String,
        /// Window end, "HH:MM"
        #[arg(long, default_value = "22:00")]
        to: String,
        /// Only show windows at least this many minutes long
        #[arg(long, default_value_t = 0)]
        min: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { schedule, input } => {
            let existing = load_schedule(&schedule)?;
            let raw = read_input(input.as_deref())?;
            let request: CreateRequest =
                serde_json::from_str(&raw).context("Failed to parse create request JSON")?;

            let decision = cadence_engine::validate_create(&request, &existing)
                .context("Failed to validate request")?;
            println!("{}", serde_json::to_string_pretty(&decision)?);

            if matches!(decision, CreateDecision::Rejected { .. }) {
                process::exit(1);
            }
        }
        Commands::Update {
            id,
            schedule,
            input,
        } => {
            let existing = load_schedule(&schedule)?;
            let id: ActivityId = id
                .parse()
                .with_context(|| format!("Invalid activity id: {}", id))?;
            let raw = read_input(input.as_deref())?;
            let request: UpdateRequest =
                serde_json::from_str(&raw).context("Failed to parse update request JSON")?;

            let decision = cadence_engine::validate_update(id, &request, &existing)
                .context("Failed to validate request")?;
            println!("{}", serde_json::to_string_pretty(&decision)?);

            if matches!(decision, UpdateDecision::Rejected { .. }) {
                process::exit(1);
            }
        }
        Commands::Free {
            schedule,
            day,
            from,
            to,
            min,
        } => {
            let existing = load_schedule(&schedule)?;
            let day = parse_weekday(&day)?;
            let day_pool: Vec<Activity> = existing
                .into_iter()
                .filter(|a| a.day_of_week == day)
                .collect();

            let windows = cadence_engine::free_windows(&day_pool, &from, &to)?;
            for window in windows.iter().filter(|w| w.duration_minutes >= min) {
                println!(
                    "{} - {}  ({} min)",
                    window.start, window.end, window.duration_minutes
                );
            }
        }
    }

    Ok(())
}

fn load_schedule(path: &str) -> Result<Vec<Activity>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid schedule JSON in {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
