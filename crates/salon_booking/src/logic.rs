// --- File: crates/salon_booking/src/logic.rs ---
//! Booking orchestration on top of the calculator, catalog and store.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use salon_common::HttpStatusCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::slots::{
    calculate_day_slots, parse_wall_date, parse_wall_time, SlotCandidate, SlotError,
};
use crate::store::{
    BookingStore, NewReservation, Reservation, ReservationStatus, StoreError, WorkerWindow,
};

const DEFAULT_TIME_ZONE: &str = "Europe/Madrid";

/// Minute-granularity past test, matching the calculator's exclusion rule.
fn is_past(date: chrono::NaiveDate, start: chrono::NaiveTime, now: NaiveDateTime) -> bool {
    use chrono::Timelike;
    let start_minutes = start.hour() * 60 + start.minute();
    let now_minutes = now.time().hour() * 60 + now.time().minute();
    date < now.date() || (date == now.date() && start_minutes < now_minutes)
}

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown service: {0}")]
    UnknownService(i64),
    #[error("service {0} is not currently offered")]
    InactiveService(i64),
    #[error("unknown worker: {0}")]
    UnknownWorker(i64),
    #[error("worker {worker_id} does not offer service {service_id}")]
    NotOffered { worker_id: i64, service_id: i64 },
    #[error("reservation length must match the service duration of {expected_minutes} minutes")]
    DurationMismatch { expected_minutes: i64 },
    #[error("requested time is outside the worker's declared availability")]
    OutsideAvailability,
    #[error("requested time is in the past")]
    InPast,
    #[error("time slot is already booked")]
    Conflict,
    #[error("reservation not found: {0}")]
    NotFound(Uuid),
    #[error("reservation {0} is already cancelled")]
    AlreadyCancelled(Uuid),
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::Slot(_)
            | BookingError::UnknownService(_)
            | BookingError::InactiveService(_)
            | BookingError::UnknownWorker(_)
            | BookingError::NotOffered { .. }
            | BookingError::DurationMismatch { .. }
            | BookingError::OutsideAvailability
            | BookingError::InPast => 400,
            BookingError::Conflict | BookingError::AlreadyCancelled(_) => 409,
            BookingError::NotFound(_) => 404,
            BookingError::Store(_) => 500,
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DaySlotsQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-03"))]
    pub date: String,

    /// The service whose duration defines the slot length
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub service_id: i64,
}

#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotView {
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "09:30"))]
    pub end_time: String,
    /// "bookable" or "occupied"
    pub status: crate::slots::SlotStatus,
}

impl From<SlotCandidate> for SlotView {
    fn from(slot: SlotCandidate) -> Self {
        SlotView {
            start_time: slot.start.format("%H:%M").to_string(),
            end_time: slot.end.format("%H:%M").to_string(),
            status: slot.status,
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DaySlotsResponse {
    pub worker_id: i64,
    pub service_id: i64,
    pub date: String,
    pub duration_minutes: i64,
    pub slots: Vec<SlotView>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddWindowRequest {
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-03"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "13:00"))]
    pub end_time: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WindowView {
    pub worker_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<WorkerWindow> for WindowView {
    fn from(w: WorkerWindow) -> Self {
        WindowView {
            worker_id: w.worker_id,
            date: w.date.format("%Y-%m-%d").to_string(),
            start_time: w.start.format("%H:%M").to_string(),
            end_time: w.end.format("%H:%M").to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateReservationRequest {
    pub worker_id: i64,
    pub service_id: i64,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-03"))]
    pub date: String,
    /// HH:MM or HH:MM:SS
    #[cfg_attr(feature = "openapi", schema(example = "09:30"))]
    pub start_time: String,
    /// Optional; when present it must equal start_time + service duration.
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub end_time: Option<String>,
    pub client_name: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationResponse {
    pub success: bool,
    pub reservation_id: Option<String>,
    pub message: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CancellationResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct HistoryQuery {
    /// Client whose reservation history to return
    pub client: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationView {
    pub reservation_id: String,
    pub service_id: i64,
    pub service_name: String,
    pub worker_id: i64,
    pub worker_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatus,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationHistoryResponse {
    pub reservations: Vec<ReservationView>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceView {
    pub service_id: i64,
    pub name: String,
    pub duration_minutes: i64,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkerView {
    pub worker_id: i64,
    pub first_name: String,
    pub last_name: String,
}

// --- Time Helpers ---

/// Resolves the wall clock for the configured salon time zone.
///
/// Past-slot exclusion depends on "today" as the salon sees it, not on the
/// server's UTC date.
pub fn local_now(time_zone: Option<&str>) -> NaiveDateTime {
    let tz = Tz::from_str(time_zone.unwrap_or(DEFAULT_TIME_ZONE)).unwrap_or(Tz::Europe__Madrid);
    Utc::now().with_timezone(&tz).naive_local()
}

// --- Availability Logic ---

/// Computes the slot candidates for one worker, date and service.
pub fn day_slots(
    catalog: &Catalog,
    store: &dyn BookingStore,
    worker_id: i64,
    query: &DaySlotsQuery,
    now: NaiveDateTime,
) -> Result<DaySlotsResponse, BookingError> {
    let service = catalog
        .service(query.service_id)
        .ok_or(BookingError::UnknownService(query.service_id))?;
    if !service.active {
        return Err(BookingError::InactiveService(service.service_id));
    }
    if catalog.worker(worker_id).is_none() {
        return Err(BookingError::UnknownWorker(worker_id));
    }

    let date = parse_wall_date(&query.date)?;

    let windows: Vec<_> = store
        .windows_for_worker(worker_id)?
        .iter()
        .map(WorkerWindow::as_availability_window)
        .collect();
    let bookings: Vec<_> = store
        .reservations_for_worker(worker_id)?
        .iter()
        .map(Reservation::as_booking)
        .collect();

    let slots = calculate_day_slots(date, service.duration_minutes, &windows, &bookings, now)?;
    debug!(worker_id, %date, slots = slots.len(), "computed day slots");

    Ok(DaySlotsResponse {
        worker_id,
        service_id: service.service_id,
        date: query.date.clone(),
        duration_minutes: service.duration_minutes,
        slots: slots.into_iter().map(SlotView::from).collect(),
    })
}

// --- Reservation Logic ---

/// Validates a reservation request against the catalog, the worker's
/// declared windows and the existing confirmed reservations.
///
/// `exclude` removes one reservation from the conflict set, so an update
/// does not collide with itself.
fn validate_reservation(
    catalog: &Catalog,
    store: &dyn BookingStore,
    request: &CreateReservationRequest,
    exclude: Option<Uuid>,
    now: NaiveDateTime,
) -> Result<NewReservation, BookingError> {
    let service = catalog
        .service(request.service_id)
        .ok_or(BookingError::UnknownService(request.service_id))?;
    if !service.active {
        return Err(BookingError::InactiveService(service.service_id));
    }
    if catalog.worker(request.worker_id).is_none() {
        return Err(BookingError::UnknownWorker(request.worker_id));
    }
    if !catalog.worker_offers(request.worker_id, request.service_id) {
        return Err(BookingError::NotOffered {
            worker_id: request.worker_id,
            service_id: request.service_id,
        });
    }

    let date = parse_wall_date(&request.date)?;
    let start = parse_wall_time(&request.start_time)?;
    let expected_end = start + chrono::Duration::minutes(service.duration_minutes);
    let end = match &request.end_time {
        Some(raw) => {
            let end = parse_wall_time(raw)?;
            if end != expected_end {
                return Err(BookingError::DurationMismatch {
                    expected_minutes: service.duration_minutes,
                });
            }
            end
        }
        None => expected_end,
    };

    if is_past(date, start, now) {
        return Err(BookingError::InPast);
    }

    // The slot must sit fully inside a declared window for the date.
    let contained = store
        .windows_for_worker(request.worker_id)?
        .iter()
        .any(|w| w.date == date && w.start <= start && end <= w.end);
    if !contained {
        return Err(BookingError::OutsideAvailability);
    }

    // Re-check overlap at write time; slots computed earlier may be stale.
    let conflicting = store
        .reservations_for_worker(request.worker_id)?
        .iter()
        .filter(|r| Some(r.id) != exclude)
        .any(|r| r.date == date && start < r.end && r.start < end);
    if conflicting {
        return Err(BookingError::Conflict);
    }

    Ok(NewReservation {
        worker_id: request.worker_id,
        service_id: request.service_id,
        client_name: request.client_name.clone(),
        date,
        start,
        end,
    })
}

pub fn create_reservation(
    catalog: &Catalog,
    store: &dyn BookingStore,
    request: &CreateReservationRequest,
    now: NaiveDateTime,
) -> Result<Reservation, BookingError> {
    let new = validate_reservation(catalog, store, request, None, now)?;
    let reservation = store.create_reservation(new)?;
    info!(
        reservation_id = %reservation.id,
        worker_id = reservation.worker_id,
        %reservation.date,
        "reservation created"
    );
    Ok(reservation)
}

pub fn modify_reservation(
    catalog: &Catalog,
    store: &dyn BookingStore,
    id: Uuid,
    request: &CreateReservationRequest,
    now: NaiveDateTime,
) -> Result<Reservation, BookingError> {
    let existing = store.reservation(id).map_err(|err| match err {
        StoreError::NotFound(id) => BookingError::NotFound(id),
        other => BookingError::Store(other),
    })?;
    if existing.status == ReservationStatus::Cancelled {
        return Err(BookingError::AlreadyCancelled(id));
    }
    // Only future reservations may be rescheduled.
    if is_past(existing.date, existing.start, now) {
        return Err(BookingError::InPast);
    }

    let new = validate_reservation(catalog, store, request, Some(id), now)?;
    let updated = store.update_reservation(id, new)?;
    info!(reservation_id = %id, "reservation modified");
    Ok(updated)
}

pub fn cancel_reservation(
    store: &dyn BookingStore,
    id: Uuid,
    now: NaiveDateTime,
) -> Result<Reservation, BookingError> {
    let existing = store.reservation(id).map_err(|err| match err {
        StoreError::NotFound(id) => BookingError::NotFound(id),
        other => BookingError::Store(other),
    })?;
    if existing.status == ReservationStatus::Cancelled {
        return Err(BookingError::AlreadyCancelled(id));
    }
    if is_past(existing.date, existing.start, now) {
        return Err(BookingError::InPast);
    }

    let cancelled = store.cancel_reservation(id)?;
    info!(reservation_id = %id, "reservation cancelled");
    Ok(cancelled)
}

/// The client's reservation history, cancelled entries filtered out.
pub fn client_history(
    catalog: &Catalog,
    store: &dyn BookingStore,
    client_name: &str,
) -> Result<Vec<ReservationView>, BookingError> {
    let mut reservations = store.reservations_for_client(client_name)?;
    reservations.retain(|r| r.status != ReservationStatus::Cancelled);
    reservations.sort_by_key(|r| (r.date, r.start));

    Ok(reservations
        .into_iter()
        .map(|r| {
            let service_name = catalog
                .service(r.service_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| format!("service {}", r.service_id));
            let worker_name = catalog
                .worker(r.worker_id)
                .map(|w| format!("{} {}", w.first_name, w.last_name))
                .unwrap_or_else(|| format!("worker {}", r.worker_id));
            ReservationView {
                reservation_id: r.id.to_string(),
                service_id: r.service_id,
                service_name,
                worker_id: r.worker_id,
                worker_name,
                date: r.date.format("%Y-%m-%d").to_string(),
                start_time: r.start.format("%H:%M").to_string(),
                end_time: r.end.format("%H:%M").to_string(),
                status: r.status,
            }
        })
        .collect())
}
