//! The in-memory appointment collection and its mutating operations.
//!
//! `AppointmentStore` exclusively owns the canonical appointment list.
//! Every mutation runs its validation and conflict check before touching
//! the collection, so a failed call leaves the store unchanged. The store
//! is an explicit value -- callers construct and own it; there is no
//! process-wide global. Mutations take `&mut self`, which under Rust's
//! borrow rules already serializes writers; share behind a `Mutex` if a
//! multi-threaded caller needs one store.

use chrono::NaiveDate;

use crate::availability::{self, Slot};
use crate::conflict;
use crate::error::{Result, ScheduleError};
use crate::interval::Interval;
use crate::model::{
    Appointment, AppointmentDraft, AppointmentPatch, AppointmentStatus, WorkingWindow,
};

/// Owner of the clinic's appointment records.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        AppointmentStore::new()
    }
}

impl AppointmentStore {
    /// An empty store.
    pub fn new() -> Self {
        AppointmentStore {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed a store from an existing schedule (e.g., a loaded JSON file).
    ///
    /// Seeded records are trusted as-is; the no-overlap invariant is
    /// enforced on every mutation from here on. The id counter advances
    /// past any `apt-N` ids present so fresh ids never collide.
    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        let next_id = appointments
            .iter()
            .filter_map(|a| a.id.strip_prefix("apt-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        AppointmentStore {
            appointments,
            next_id,
        }
    }

    /// Book a new appointment.
    ///
    /// Runs the conflict check against all active appointments for the
    /// draft's dentist and date; on collision, fails with
    /// `ScheduleError::Conflict` carrying the blocking ids and leaves the
    /// store unchanged. On success, assigns a fresh id, appends the
    /// record, and returns a copy of it.
    pub fn create(&mut self, draft: AppointmentDraft) -> Result<Appointment> {
        let blocking = conflict::conflicting_ids(
            &draft.interval,
            &draft.dentist_id,
            &self.appointments,
            None,
        );
        if !blocking.is_empty() {
            return Err(ScheduleError::Conflict {
                dentist_id: draft.dentist_id,
                date: draft.interval.date(),
                conflicting_ids: blocking,
            });
        }

        let id = format!("apt-{}", self.next_id);
        self.next_id += 1;

        let appointment = Appointment {
            id,
            patient_id: draft.patient_id,
            dentist_id: draft.dentist_id,
            interval: draft.interval,
            status: draft.status,
            kind: draft.kind,
            notes: draft.notes,
        };
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Apply a partial update to an existing appointment.
    ///
    /// All-or-nothing: the patched record is built and validated first,
    /// and only replaces the stored one once every check passes. The
    /// conflict check (excluding the appointment's own id) re-runs when
    /// the patch reschedules (dentist/date/start/end) and when it
    /// reactivates a cancelled or no-show appointment -- restoring a
    /// booking must not overlap whatever took its slot in the meantime.
    pub fn update(&mut self, id: &str, patch: AppointmentPatch) -> Result<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;

        let current = &self.appointments[index];
        let mut updated = current.clone();

        if let Some(patient_id) = patch.patient_id.clone() {
            updated.patient_id = patient_id;
        }
        if let Some(dentist_id) = patch.dentist_id.clone() {
            updated.dentist_id = dentist_id;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(kind) = patch.kind {
            updated.kind = kind;
        }
        if let Some(notes) = patch.notes.clone() {
            updated.notes = Some(notes);
        }
        if patch.reschedules() {
            let date = patch.date.unwrap_or_else(|| current.interval.date());
            let start = patch.start.unwrap_or_else(|| current.interval.start());
            let end = patch.end.unwrap_or_else(|| current.interval.end());
            updated.interval = Interval::new(date, start, end)?;
        }

        let reactivated = updated.status.is_active() && !current.status.is_active();
        if patch.reschedules() || reactivated {
            let blocking = conflict::conflicting_ids(
                &updated.interval,
                &updated.dentist_id,
                &self.appointments,
                Some(id),
            );
            if !blocking.is_empty() {
                return Err(ScheduleError::Conflict {
                    dentist_id: updated.dentist_id,
                    date: updated.interval.date(),
                    conflicting_ids: blocking,
                });
            }
        }

        self.appointments[index] = updated.clone();
        Ok(updated)
    }

    /// Remove an appointment, returning the removed record.
    ///
    /// Deletion never creates overlap, so no conflict check runs.
    pub fn delete(&mut self, id: &str) -> Result<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;
        Ok(self.appointments.remove(index))
    }

    /// Mark an appointment cancelled, freeing its slot for new bookings.
    pub fn cancel(&mut self, id: &str) -> Result<Appointment> {
        self.update(
            id,
            AppointmentPatch {
                status: Some(AppointmentStatus::Cancelled),
                ..AppointmentPatch::default()
            },
        )
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Read-only view of every record, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// All appointments for a dentist, in insertion order. Callers wanting
    /// chronological order sort by `(date, start)`.
    pub fn list_by_dentist(&self, dentist_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.dentist_id == dentist_id)
            .cloned()
            .collect()
    }

    /// All appointments for a patient, in insertion order.
    pub fn list_by_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect()
    }

    /// Whether `candidate` could be booked for the dentist right now.
    pub fn is_free(&self, candidate: &Interval, dentist_id: &str, exclude_id: Option<&str>) -> bool {
        conflict::is_free(candidate, dentist_id, &self.appointments, exclude_id)
    }

    /// Free slots of `duration_minutes` for the dentist on `date`, given
    /// the dentist's working windows. Reads the current appointments
    /// without mutating them.
    pub fn available_slots(
        &self,
        date: NaiveDate,
        dentist_id: &str,
        duration_minutes: u32,
        windows: &[WorkingWindow],
    ) -> Result<Vec<Slot>> {
        availability::generate_slots(
            date,
            dentist_id,
            duration_minutes,
            windows,
            &self.appointments,
        )
    }
}
