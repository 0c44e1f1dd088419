// --- File: crates/salon_booking/src/draft.rs ---
//! The booking draft the UI flow threads through its steps.
//!
//! The widget walks service -> worker -> date -> slot. Instead of shared
//! mutable selection state, each step is a consuming transition on an
//! immutable value; picking something upstream resets every choice
//! downstream of it.

use chrono::{NaiveDate, NaiveTime};

use crate::logic::CreateReservationRequest;

/// The service selection: which offering, and how long its slots are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSelection {
    pub service_id: i64,
    pub duration_minutes: i64,
}

/// Accumulated selections of a booking in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    service: Option<ServiceSelection>,
    worker_id: Option<i64>,
    date: Option<NaiveDate>,
    slot_start: Option<NaiveTime>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting a service invalidates the worker, date and slot choices.
    pub fn select_service(self, service: ServiceSelection) -> Self {
        Self {
            service: Some(service),
            worker_id: None,
            date: None,
            slot_start: None,
        }
    }

    /// Selecting a worker invalidates the date and slot choices.
    pub fn select_worker(self, worker_id: i64) -> Self {
        Self {
            worker_id: Some(worker_id),
            date: None,
            slot_start: None,
            ..self
        }
    }

    /// Selecting a date invalidates the slot choice.
    pub fn select_date(self, date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            slot_start: None,
            ..self
        }
    }

    pub fn select_slot(self, slot_start: NaiveTime) -> Self {
        Self {
            slot_start: Some(slot_start),
            ..self
        }
    }

    pub fn service(&self) -> Option<ServiceSelection> {
        self.service
    }

    pub fn worker_id(&self) -> Option<i64> {
        self.worker_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn slot_start(&self) -> Option<NaiveTime> {
        self.slot_start
    }

    /// A draft is complete once every step has a selection.
    pub fn is_complete(&self) -> bool {
        self.service.is_some()
            && self.worker_id.is_some()
            && self.date.is_some()
            && self.slot_start.is_some()
    }

    /// Converts a complete draft into the reservation request the backend
    /// accepts. Returns `None` while any step is still unselected.
    pub fn reservation_request(&self, client_name: &str) -> Option<CreateReservationRequest> {
        let service = self.service?;
        let worker_id = self.worker_id?;
        let date = self.date?;
        let start = self.slot_start?;
        let end = start + chrono::Duration::minutes(service.duration_minutes);

        Some(CreateReservationRequest {
            worker_id,
            service_id: service.service_id,
            date: date.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: Some(end.format("%H:%M").to_string()),
            client_name: client_name.to_string(),
        })
    }
}
