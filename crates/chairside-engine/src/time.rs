//! Wall-clock time arithmetic -- parsing, formatting, and bounded addition.
//!
//! Times are local wall-clock values with no date or timezone attached.
//! Arithmetic never crosses midnight: appointments are single-day, so a
//! computed end time at or past 24:00 is an error rather than a wraparound.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a day; `TimeOfDay` values live in `[0, MINUTES_PER_DAY)`.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Ordered chronologically. The wire format (serde and `Display`) is the
/// strict `HH:MM` form used by booking forms, so parse/format round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Construct a time from an hour in `0..=23` and a minute in `0..=59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::Format(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(TimeOfDay { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_from_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Advance by `minutes` within the same day.
    ///
    /// # Errors
    /// Returns `ScheduleError::OutOfRange` if the result would land at or
    /// past 24:00. There is no wraparound policy.
    pub fn add_minutes(&self, minutes: u32) -> Result<Self> {
        let total = self.minutes_from_midnight() + minutes;
        if total >= MINUTES_PER_DAY {
            return Err(ScheduleError::OutOfRange {
                start: *self,
                minutes,
            });
        }
        Ok(TimeOfDay {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        })
    }
}

/// Compute the end time of an appointment from its start and duration.
///
/// # Errors
/// Returns `ScheduleError::InvalidDuration` for a zero duration, and
/// `ScheduleError::OutOfRange` if the end would cross midnight.
pub fn calculate_end_time(start: TimeOfDay, duration_minutes: u32) -> Result<TimeOfDay> {
    if duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    start.add_minutes(duration_minutes)
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parse strict `HH:MM` -- exactly two digits on each side, in range.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ScheduleError::Format(s.to_string());

        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(malformed());
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour: u8 = h.parse().map_err(|_| malformed())?;
        let minute: u8 = m.parse().map_err(|_| malformed())?;
        TimeOfDay::new(hour, minute).map_err(|_| malformed())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String {
        t.to_string()
    }
}

/// Parse a calendar date in strict ISO `YYYY-MM-DD` form.
///
/// ISO ordering of the text matches chronological ordering of the dates,
/// which is what booking forms and the schedule file format rely on.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ScheduleError::Format(s.to_string()))
}

/// Format a calendar date as ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
