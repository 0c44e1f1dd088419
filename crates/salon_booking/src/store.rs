// --- File: crates/salon_booking/src/store.rs ---
//! Reservation and availability storage.
//!
//! The trait keeps the handlers decoupled from how bookings are kept; the
//! in-memory implementation behind a `RwLock` is the only one shipped, a
//! SQL-backed one would implement the same trait. Cancellation is a status
//! flip, never a delete, so history stays queryable.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

use crate::slots::{AvailabilityWindow, Booking};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("reservation not found: {0}")]
    NotFound(Uuid),
    #[error("storage lock poisoned")]
    Poisoned,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

/// A window a worker has declared themselves available for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerWindow {
    pub worker_id: i64,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkerWindow {
    pub fn as_availability_window(&self) -> AvailabilityWindow {
        AvailabilityWindow {
            date: self.date,
            start: self.start,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: Uuid,
    pub worker_id: i64,
    pub service_id: i64,
    pub client_name: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: ReservationStatus,
}

impl Reservation {
    pub fn as_booking(&self) -> Booking {
        Booking {
            date: self.date,
            start: self.start,
            end: self.end,
        }
    }
}

/// Fields of a reservation the caller supplies; the store assigns the id
/// and the initial status.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub worker_id: i64,
    pub service_id: i64,
    pub client_name: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

pub trait BookingStore: Send + Sync {
    fn add_window(&self, window: WorkerWindow) -> Result<(), StoreError>;

    fn windows_for_worker(&self, worker_id: i64) -> Result<Vec<WorkerWindow>, StoreError>;

    /// Confirmed reservations for a worker; cancelled ones do not block slots.
    fn reservations_for_worker(&self, worker_id: i64) -> Result<Vec<Reservation>, StoreError>;

    fn reservations_for_client(&self, client_name: &str) -> Result<Vec<Reservation>, StoreError>;

    fn reservation(&self, id: Uuid) -> Result<Reservation, StoreError>;

    fn create_reservation(&self, new: NewReservation) -> Result<Reservation, StoreError>;

    /// Replaces the mutable fields of an existing reservation.
    fn update_reservation(&self, id: Uuid, new: NewReservation) -> Result<Reservation, StoreError>;

    /// Marks a reservation as cancelled without deleting it.
    fn cancel_reservation(&self, id: Uuid) -> Result<Reservation, StoreError>;
}

#[derive(Debug, Default)]
struct StoreInner {
    windows: Vec<WorkerWindow>,
    reservations: Vec<Reservation>,
}

/// In-memory [`BookingStore`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    inner: std::sync::RwLock<StoreInner>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn add_window(&self, window: WorkerWindow) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.windows.push(window);
        Ok(())
    }

    fn windows_for_worker(&self, worker_id: i64) -> Result<Vec<WorkerWindow>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .windows
            .iter()
            .filter(|w| w.worker_id == worker_id)
            .copied()
            .collect())
    }

    fn reservations_for_worker(&self, worker_id: i64) -> Result<Vec<Reservation>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .reservations
            .iter()
            .filter(|r| r.worker_id == worker_id && r.status == ReservationStatus::Confirmed)
            .cloned()
            .collect())
    }

    fn reservations_for_client(&self, client_name: &str) -> Result<Vec<Reservation>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .reservations
            .iter()
            .filter(|r| r.client_name == client_name)
            .cloned()
            .collect())
    }

    fn reservation(&self, id: Uuid) -> Result<Reservation, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        inner
            .reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create_reservation(&self, new: NewReservation) -> Result<Reservation, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let reservation = Reservation {
            id: Uuid::new_v4(),
            worker_id: new.worker_id,
            service_id: new.service_id,
            client_name: new.client_name,
            date: new.date,
            start: new.start,
            end: new.end,
            status: ReservationStatus::Confirmed,
        };
        inner.reservations.push(reservation.clone());
        Ok(reservation)
    }

    fn update_reservation(&self, id: Uuid, new: NewReservation) -> Result<Reservation, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let reservation = inner
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        reservation.worker_id = new.worker_id;
        reservation.service_id = new.service_id;
        reservation.client_name = new.client_name;
        reservation.date = new.date;
        reservation.start = new.start;
        reservation.end = new.end;
        Ok(reservation.clone())
    }

    fn cancel_reservation(&self, id: Uuid) -> Result<Reservation, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let reservation = inner
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        reservation.status = ReservationStatus::Cancelled;
        Ok(reservation.clone())
    }
}
