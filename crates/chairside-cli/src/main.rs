//! `chairside` CLI — query a clinic schedule file from the command line.
//!
//! The schedule file is JSON with the dentists' working windows and the
//! booked appointments:
//!
//! ```json
//! {
//!   "windows": [
//!     { "dentist_id": "dentist-1", "weekday": "Wed", "start": "09:00", "end": "17:00" }
//!   ],
//!   "appointments": [
//!     { "id": "apt-1", "patient_id": "patient-1", "dentist_id": "dentist-1",
//!       "interval": { "date": "2024-01-10", "start": "09:00", "end": "09:30" },
//!       "status": "scheduled", "type": "checkup" }
//!   ]
//! }
//! ```
//!
//! ## Usage
//!
//! ```sh
//! # Free 30-minute slots for a dentist on a date (file → stdout)
//! chairside slots -i schedule.json --date 2024-01-10 --dentist dentist-1 --duration 30
//!
//! # Would this interval conflict? Exit 0 if free, 1 if taken.
//! chairside check -i schedule.json --date 2024-01-10 --start 09:15 --end 09:45 --dentist dentist-1
//!
//! # Appointments for one dentist or one patient, sorted by (date, start)
//! chairside list -i schedule.json --dentist dentist-1
//!
//! # Schedule can also arrive on stdin
//! cat schedule.json | chairside slots --date 2024-01-10 --dentist dentist-1 --duration 30
//! ```

use anyhow::{Context, Result};
use chairside_engine::{
    conflicting_ids, generate_slots_with_granularity, parse_date, Appointment, TimeOfDay,
    WorkingWindow, DEFAULT_GRANULARITY_MINUTES,
};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "chairside",
    version,
    about = "Query a clinic schedule: free slots, conflicts, listings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List free slots for a dentist on a date
    Slots {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to query, ISO YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Dentist id
        #[arg(long)]
        dentist: String,
        /// Appointment duration in minutes
        #[arg(long)]
        duration: u32,
        /// Grid step in minutes (default 30)
        #[arg(long)]
        granularity: Option<u32>,
        /// Emit a JSON array instead of one slot per line
        #[arg(long)]
        json: bool,
    },
    /// Check whether an interval is free for a dentist (exit 1 on conflict)
    Check {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to check, ISO YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Candidate start time, HH:MM
        #[arg(long)]
        start: String,
        /// Candidate end time, HH:MM
        #[arg(long)]
        end: String,
        /// Dentist id
        #[arg(long)]
        dentist: String,
        /// Appointment id to ignore (when rescheduling it)
        #[arg(long)]
        exclude: Option<String>,
    },
    /// List appointments for a dentist or a patient
    List {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Dentist id to filter by
        #[arg(long)]
        dentist: Option<String>,
        /// Patient id to filter by
        #[arg(long)]
        patient: Option<String>,
    },
}

/// On-disk schedule shape. Deserializing runs the engine's interval and
/// window validation, so a malformed file is rejected up front.
#[derive(Deserialize, Default)]
struct ScheduleFile {
    #[serde(default)]
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    appointments: Vec<Appointment>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            input,
            date,
            dentist,
            duration,
            granularity,
            json,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let date = parse_date(&date).context("Invalid --date")?;

            let slots = generate_slots_with_granularity(
                date,
                &dentist,
                duration,
                &schedule.windows,
                &schedule.appointments,
                granularity.unwrap_or(DEFAULT_GRANULARITY_MINUTES),
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Check {
            input,
            date,
            start,
            end,
            dentist,
            exclude,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let date = parse_date(&date).context("Invalid --date")?;
            let start: TimeOfDay = start.parse().context("Invalid --start")?;
            let end: TimeOfDay = end.parse().context("Invalid --end")?;
            let candidate = chairside_engine::Interval::new(date, start, end)?;

            let blocking = conflicting_ids(
                &candidate,
                &dentist,
                &schedule.appointments,
                exclude.as_deref(),
            );
            if blocking.is_empty() {
                println!("free");
            } else {
                println!("conflict: {}", blocking.join(", "));
                process::exit(1);
            }
        }
        Commands::List {
            input,
            dentist,
            patient,
        } => {
            let schedule = read_schedule(input.as_deref())?;

            let mut matches: Vec<&Appointment> = match (dentist.as_deref(), patient.as_deref()) {
                (Some(d), None) => schedule
                    .appointments
                    .iter()
                    .filter(|a| a.dentist_id == d)
                    .collect(),
                (None, Some(p)) => schedule
                    .appointments
                    .iter()
                    .filter(|a| a.patient_id == p)
                    .collect(),
                _ => anyhow::bail!("Pass exactly one of --dentist or --patient"),
            };

            matches.sort_by_key(|a| (a.interval.date(), a.interval.start()));
            for a in matches {
                println!(
                    "{}  {} {}-{}  dentist={} patient={}  {} {}",
                    a.id,
                    a.interval.date(),
                    a.interval.start(),
                    a.interval.end(),
                    a.dentist_id,
                    a.patient_id,
                    a.status,
                    a.kind,
                );
            }
        }
    }

    Ok(())
}

/// Read and parse the schedule from a file or stdin.
fn read_schedule(path: Option<&str>) -> Result<ScheduleFile> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Failed to parse schedule JSON")
}
