//! Free-slot generation within a dentist's working window.
//!
//! Enumerates candidate start times on a fixed-granularity grid across the
//! window for the requested date's weekday, drops candidates that would
//! run past closing, and keeps the ones the conflict checker reports free.
//! The result is sorted by start time and never mutates anything.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::conflict;
use crate::error::{Result, ScheduleError};
use crate::interval::Interval;
use crate::model::{Appointment, WorkingWindow};
use crate::time::{calculate_end_time, TimeOfDay};

/// Grid step used when the caller does not pick one. Matches the
/// 30-minute booking grid the clinic UI offers.
pub const DEFAULT_GRANULARITY_MINUTES: u32 = 30;

/// A bookable `{start, end}` pair of the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Generate free slots on the default 30-minute grid.
///
/// See [`generate_slots_with_granularity`] for the full contract.
pub fn generate_slots(
    date: NaiveDate,
    dentist_id: &str,
    duration_minutes: u32,
    windows: &[WorkingWindow],
    appointments: &[Appointment],
) -> Result<Vec<Slot>> {
    generate_slots_with_granularity(
        date,
        dentist_id,
        duration_minutes,
        windows,
        appointments,
        DEFAULT_GRANULARITY_MINUTES,
    )
}

/// Generate all free `{start, end}` pairs of `duration_minutes` within the
/// dentist's working window(s) on `date`, stepping candidate starts by
/// `granularity_minutes`.
///
/// `windows` may hold windows for several dentists and weekdays; only
/// those matching `dentist_id` and the date's weekday contribute. No
/// matching window means the dentist is not working that day and yields an
/// empty list, not an error. Slots are returned in ascending start order.
///
/// # Errors
/// Returns `ScheduleError::InvalidDuration` if `duration_minutes` or
/// `granularity_minutes` is zero.
pub fn generate_slots_with_granularity(
    date: NaiveDate,
    dentist_id: &str,
    duration_minutes: u32,
    windows: &[WorkingWindow],
    appointments: &[Appointment],
    granularity_minutes: u32,
) -> Result<Vec<Slot>> {
    if duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    if granularity_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(granularity_minutes));
    }

    let weekday = date.weekday();
    let mut slots = Vec::new();

    for window in windows
        .iter()
        .filter(|w| w.dentist_id == dentist_id && w.weekday == weekday)
    {
        collect_window_slots(
            date,
            dentist_id,
            duration_minutes,
            window,
            appointments,
            granularity_minutes,
            &mut slots,
        )?;
    }

    // A dentist with split (morning/afternoon) windows produces two runs;
    // present them as one ascending sequence.
    slots.sort_by_key(|s| s.start);
    Ok(slots)
}

fn collect_window_slots(
    date: NaiveDate,
    dentist_id: &str,
    duration_minutes: u32,
    window: &WorkingWindow,
    appointments: &[Appointment],
    granularity_minutes: u32,
    slots: &mut Vec<Slot>,
) -> Result<()> {
    let mut cursor = window.start();

    while cursor < window.end() {
        // End past closing (or past midnight) disqualifies this start, and
        // every later start ends later still.
        let end = match calculate_end_time(cursor, duration_minutes) {
            Ok(end) if end <= window.end() => end,
            _ => break,
        };

        let candidate = Interval::new(date, cursor, end)?;
        if conflict::is_free(&candidate, dentist_id, appointments, None) {
            slots.push(Slot { start: cursor, end });
        }

        cursor = match cursor.add_minutes(granularity_minutes) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    Ok(())
}
