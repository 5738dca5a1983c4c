//! Detect collisions between a candidate interval and existing bookings.
//!
//! A candidate conflicts with an appointment when both belong to the same
//! dentist on the same date, the appointment is active (not cancelled or
//! no-show), and the two half-open intervals overlap. Adjacent bookings
//! (one ends exactly when the other starts) are NOT conflicts.

use crate::interval::Interval;
use crate::model::Appointment;

/// Ids of the active appointments that collide with `candidate`.
///
/// Filters `appointments` to the given dentist and the candidate's date,
/// skips `exclude_id` (so an appointment being rescheduled never conflicts
/// with itself) and inactive statuses, then scans for overlap. The result
/// preserves the input order.
///
/// Linear in the number of appointments; daily per-dentist counts are
/// small enough that no index is kept.
pub fn conflicting_ids(
    candidate: &Interval,
    dentist_id: &str,
    appointments: &[Appointment],
    exclude_id: Option<&str>,
) -> Vec<String> {
    appointments
        .iter()
        .filter(|a| a.dentist_id == dentist_id)
        .filter(|a| exclude_id != Some(a.id.as_str()))
        .filter(|a| a.status.is_active())
        .filter(|a| a.interval.overlaps(candidate))
        .map(|a| a.id.clone())
        .collect()
}

/// `true` iff `candidate` collides with no active appointment for the
/// dentist on that date.
///
/// Pure query: absence of data yields `true`.
pub fn is_free(
    candidate: &Interval,
    dentist_id: &str,
    appointments: &[Appointment],
    exclude_id: Option<&str>,
) -> bool {
    conflicting_ids(candidate, dentist_id, appointments, exclude_id).is_empty()
}
