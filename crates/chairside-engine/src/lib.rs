//! # chairside-engine
//!
//! Appointment scheduling and conflict-resolution engine for dental
//! clinics.
//!
//! The engine decides, for a dentist and a date, which time slots are
//! bookable, detects overlapping-interval conflicts, and enforces the
//! booking invariants on an in-memory appointment collection. Everything
//! is synchronous and deterministic: no I/O, no clocks, no hidden state.
//! The surrounding application (forms, calendars, dashboards) is an
//! external collaborator that feeds parsed input in and renders results.
//!
//! ## Quick start
//!
//! ```rust
//! use chairside_engine::{
//!     AppointmentDraft, AppointmentStore, AppointmentType, Interval, TimeOfDay, WorkingWindow,
//! };
//! use chrono::{NaiveDate, Weekday};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(); // a Wednesday
//! let start: TimeOfDay = "09:00".parse()?;
//! let end: TimeOfDay = "09:30".parse()?;
//!
//! let mut store = AppointmentStore::new();
//! let booked = store.create(AppointmentDraft::new(
//!     "patient-1",
//!     "dentist-1",
//!     Interval::new(date, start, end)?,
//!     AppointmentType::Checkup,
//! ))?;
//! assert_eq!(booked.id, "apt-1");
//!
//! // The booked half hour is gone; the next grid slot is the first free one.
//! let window = WorkingWindow::new("dentist-1", Weekday::Wed, "09:00".parse()?, "12:00".parse()?)?;
//! let slots = store.available_slots(date, "dentist-1", 30, &[window])?;
//! assert_eq!(slots[0].to_string(), "09:30-10:00");
//! # Ok::<(), chairside_engine::ScheduleError>(())
//! ```
//!
//! ## Modules
//!
//! - [`time`] — wall-clock times: strict `HH:MM` parsing, bounded arithmetic
//! - [`interval`] — half-open dated intervals and overlap testing
//! - [`model`] — appointments, working windows, treatments
//! - [`conflict`] — collision detection against existing bookings
//! - [`availability`] — free-slot generation within a working window
//! - [`store`] — the owned in-memory collection and its mutations
//! - [`error`] — error types

pub mod availability;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod model;
pub mod store;
pub mod time;

pub use availability::{
    generate_slots, generate_slots_with_granularity, Slot, DEFAULT_GRANULARITY_MINUTES,
};
pub use conflict::{conflicting_ids, is_free};
pub use error::{Result, ScheduleError};
pub use interval::Interval;
pub use model::{
    Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus, AppointmentType, Treatment,
    WorkingWindow,
};
pub use store::AppointmentStore;
pub use time::{calculate_end_time, format_date, parse_date, TimeOfDay};
