//! Error types for scheduling operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::time::TimeOfDay;

/// Errors that can occur while validating input or mutating the schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Malformed time or date text (e.g., "9:00" or "2024-13-01").
    #[error("Invalid format: {0}")]
    Format(String),

    /// An interval whose end does not come strictly after its start.
    #[error("Invalid interval: end {end} must be after start {start}")]
    InvalidInterval { start: TimeOfDay, end: TimeOfDay },

    /// A zero-length duration or step where a positive one is required.
    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(u32),

    /// Time arithmetic that would cross midnight. Appointments are
    /// single-day; there is no wraparound.
    #[error("Time out of range: {start} + {minutes} minutes crosses midnight")]
    OutOfRange { start: TimeOfDay, minutes: u32 },

    /// The candidate interval overlaps one or more active appointments
    /// for the same dentist on the same date.
    #[error("Scheduling conflict for dentist {dentist_id} on {date}: overlaps {conflicting_ids:?}")]
    Conflict {
        dentist_id: String,
        date: NaiveDate,
        conflicting_ids: Vec<String>,
    },

    /// The referenced appointment id does not exist in the store.
    #[error("Appointment not found: {0}")]
    NotFound(String),
}

/// Convenience alias used throughout chairside-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
