//! Domain records: appointments, working windows, and treatments.
//!
//! These are the entities the surrounding clinic application hands to the
//! engine. Status and type are closed enums (not free-form strings) so the
//! conflict checker's "active" policy is an exhaustive match -- adding a
//! new status forces an explicit decision about whether it occupies
//! calendar time.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this state occupies the dentist's
    /// calendar for conflict purposes.
    ///
    /// Cancelled and no-show appointments free their slot. The match is
    /// exhaustive so a new status cannot silently default either way.
    pub fn is_active(&self) -> bool {
        match self {
            AppointmentStatus::Scheduled => true,
            AppointmentStatus::Confirmed => true,
            AppointmentStatus::Completed => true,
            AppointmentStatus::Cancelled => false,
            AppointmentStatus::NoShow => false,
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        };
        f.write_str(name)
    }
}

/// Kind of treatment the appointment is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    #[default]
    Checkup,
    Cleaning,
    Filling,
    Extraction,
    RootCanal,
    Crown,
    Other,
}

impl std::fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppointmentType::Checkup => "checkup",
            AppointmentType::Cleaning => "cleaning",
            AppointmentType::Filling => "filling",
            AppointmentType::Extraction => "extraction",
            AppointmentType::RootCanal => "root-canal",
            AppointmentType::Crown => "crown",
            AppointmentType::Other => "other",
        };
        f.write_str(name)
    }
}

/// A booked appointment, owned by the [`AppointmentStore`].
///
/// `id` is assigned by the store at creation and immutable thereafter.
///
/// [`AppointmentStore`]: crate::store::AppointmentStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub dentist_id: String,
    pub interval: Interval,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input to [`AppointmentStore::create`] -- an appointment without an id.
///
/// [`AppointmentStore::create`]: crate::store::AppointmentStore::create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub dentist_id: String,
    pub interval: Interval,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(rename = "type", default)]
    pub kind: AppointmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AppointmentDraft {
    /// Draft with default status (`Scheduled`) and no notes.
    pub fn new(
        patient_id: impl Into<String>,
        dentist_id: impl Into<String>,
        interval: Interval,
        kind: AppointmentType,
    ) -> Self {
        AppointmentDraft {
            patient_id: patient_id.into(),
            dentist_id: dentist_id.into(),
            interval,
            status: AppointmentStatus::default(),
            kind,
            notes: None,
        }
    }
}

/// Partial update for [`AppointmentStore::update`]. Unset fields are left
/// unchanged. Touching `dentist_id`, `date`, `start`, or `end` re-runs
/// interval validation and the conflict check.
///
/// [`AppointmentStore::update`]: crate::store::AppointmentStore::update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub patient_id: Option<String>,
    pub dentist_id: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub status: Option<AppointmentStatus>,
    pub kind: Option<AppointmentType>,
    pub notes: Option<String>,
}

impl AppointmentPatch {
    /// Whether this patch touches any field the conflict check depends on.
    pub fn reschedules(&self) -> bool {
        self.dentist_id.is_some()
            || self.date.is_some()
            || self.start.is_some()
            || self.end.is_some()
    }
}

/// A recurring day-of-week range during which a dentist accepts bookings.
///
/// Invariant: `start < end`, enforced at construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkingWindowRepr")]
pub struct WorkingWindow {
    pub dentist_id: String,
    pub weekday: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl WorkingWindow {
    pub fn new(
        dentist_id: impl Into<String>,
        weekday: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self> {
        if end <= start {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(WorkingWindow {
            dentist_id: dentist_id.into(),
            weekday,
            start,
            end,
        })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }
}

/// Raw deserialization shape for [`WorkingWindow`]; validated via
/// `TryFrom` so a schedule file cannot smuggle in an inverted window.
#[derive(Deserialize)]
struct WorkingWindowRepr {
    dentist_id: String,
    weekday: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<WorkingWindowRepr> for WorkingWindow {
    type Error = ScheduleError;

    fn try_from(raw: WorkingWindowRepr) -> Result<Self> {
        WorkingWindow::new(raw.dentist_id, raw.weekday, raw.start, raw.end)
    }
}

/// A treatment offered by the clinic; supplies the default appointment
/// duration when the caller does not specify one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub cost: f64,
}

impl Treatment {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration_minutes: u32,
        cost: f64,
    ) -> Result<Self> {
        if duration_minutes == 0 {
            return Err(ScheduleError::InvalidDuration(duration_minutes));
        }
        Ok(Treatment {
            id: id.into(),
            name: name.into(),
            duration_minutes,
            cost,
        })
    }
}
