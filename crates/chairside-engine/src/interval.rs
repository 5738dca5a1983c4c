//! Half-open time intervals on a specific calendar date.
//!
//! An interval `[start, end)` does not include its end instant, so an
//! appointment ending at 10:00 never collides with one starting at 10:00.
//! Intervals on different dates are never comparable and never overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::{calculate_end_time, TimeOfDay};

/// A half-open `[start, end)` time range on a single calendar date.
///
/// Invariant: `start < end`. Zero-length and inverted intervals are
/// rejected at construction, so every `Interval` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct Interval {
    date: NaiveDate,
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Raw deserialization shape; validated via `TryFrom` so a schedule file
/// cannot smuggle in an inverted or zero-length interval.
#[derive(Deserialize)]
struct IntervalRepr {
    date: NaiveDate,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = ScheduleError;

    fn try_from(raw: IntervalRepr) -> Result<Self> {
        Interval::new(raw.date, raw.start, raw.end)
    }
}

impl Interval {
    /// Construct an interval, rejecting `end <= start`.
    pub fn new(date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if end <= start {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(Interval { date, start, end })
    }

    /// Construct an interval from a start time and a positive duration.
    pub fn from_duration(date: NaiveDate, start: TimeOfDay, duration_minutes: u32) -> Result<Self> {
        let end = calculate_end_time(start, duration_minutes)?;
        Interval::new(date, start, end)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_from_midnight() - self.start.minutes_from_midnight()
    }

    /// `true` iff the two intervals share a date and their time ranges
    /// intersect.
    ///
    /// Two intervals overlap iff `a.start < b.end AND b.start < a.end`.
    /// This excludes the adjacent case where `a.end == b.start`, so
    /// back-to-back bookings are allowed.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }
}
