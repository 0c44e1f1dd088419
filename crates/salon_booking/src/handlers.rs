// --- File: crates/salon_booking/src/handlers.rs ---
use crate::catalog::Catalog;
use crate::logic::{
    cancel_reservation, client_history, create_reservation, day_slots, local_now,
    modify_reservation, AddWindowRequest, BookingError, CancellationResponse,
    CreateReservationRequest, DaySlotsQuery, DaySlotsResponse, HistoryQuery,
    ReservationHistoryResponse, ReservationResponse, ServiceView, WindowView, WorkerView,
};
use crate::slots::{parse_wall_date, parse_wall_time, SlotError};
use crate::store::{BookingStore, StoreError, WorkerWindow};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use salon_common::features::is_booking_enabled;
use salon_common::logging::log_error;
use salon_common::HttpStatusCode;
use salon_config::AppConfig;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// Define shared state needed by booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn BookingStore>,
}

impl BookingState {
    fn time_zone(&self) -> Option<&str> {
        self.config
            .booking
            .as_ref()
            .and_then(|b| b.time_zone.as_deref())
    }
}

fn error_response(err: BookingError) -> (StatusCode, String) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Runtime gate for the booking feature; every booking endpoint checks it.
fn ensure_booking_enabled(state: &BookingState) -> Result<(), (StatusCode, String)> {
    if is_booking_enabled(&state.config) {
        Ok(())
    } else {
        Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ))
    }
}

/// Handler to list active service offerings.
#[axum::debug_handler]
pub async fn list_services_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<ServiceView>>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;

    let services = state
        .catalog
        .active_services()
        .into_iter()
        .map(|s| ServiceView {
            service_id: s.service_id,
            name: s.name.clone(),
            duration_minutes: s.duration_minutes,
        })
        .collect();
    Ok(Json(services))
}

/// Handler to list the workers assigned to a service.
#[axum::debug_handler]
pub async fn workers_by_service_handler(
    State(state): State<Arc<BookingState>>,
    Path(service_id): Path<i64>,
) -> Result<Json<Vec<WorkerView>>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    if state.catalog.service(service_id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("unknown service: {service_id}"),
        ));
    }
    let workers = state
        .catalog
        .workers_for_service(service_id)
        .into_iter()
        .map(|w| WorkerView {
            worker_id: w.worker_id,
            first_name: w.first_name.clone(),
            last_name: w.last_name.clone(),
        })
        .collect();
    Ok(Json(workers))
}

/// Handler to list a worker's declared availability windows.
#[axum::debug_handler]
pub async fn worker_windows_handler(
    State(state): State<Arc<BookingState>>,
    Path(worker_id): Path<i64>,
) -> Result<Json<Vec<WindowView>>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    if state.catalog.worker(worker_id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("unknown worker: {worker_id}"),
        ));
    }
    let windows = state
        .store
        .windows_for_worker(worker_id)
        .map_err(store_error)?;
    Ok(Json(windows.into_iter().map(WindowView::from).collect()))
}

/// Handler to declare an availability window for a worker.
#[axum::debug_handler]
pub async fn add_window_handler(
    State(state): State<Arc<BookingState>>,
    Path(worker_id): Path<i64>,
    Json(payload): Json<AddWindowRequest>,
) -> Result<Json<WindowView>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    if state.catalog.worker(worker_id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("unknown worker: {worker_id}"),
        ));
    }
    let date = parse_wall_date(&payload.date).map_err(slot_error)?;
    let start = parse_wall_time(&payload.start_time).map_err(slot_error)?;
    let end = parse_wall_time(&payload.end_time).map_err(slot_error)?;
    if end <= start {
        return Err((
            StatusCode::BAD_REQUEST,
            "window end must be after its start".to_string(),
        ));
    }

    let window = WorkerWindow {
        worker_id,
        date,
        start,
        end,
    };
    state.store.add_window(window).map_err(store_error)?;
    info!(worker_id, %date, "availability window declared");
    Ok(Json(WindowView::from(window)))
}

/// Handler to list a worker's confirmed reservations.
#[axum::debug_handler]
pub async fn worker_reservations_handler(
    State(state): State<Arc<BookingState>>,
    Path(worker_id): Path<i64>,
) -> Result<Json<Vec<WindowView>>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    if state.catalog.worker(worker_id).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("unknown worker: {worker_id}"),
        ));
    }
    let reservations = state
        .store
        .reservations_for_worker(worker_id)
        .map_err(store_error)?;
    // The calendar view only needs the occupied intervals, not the clients.
    let intervals = reservations
        .into_iter()
        .map(|r| WindowView {
            worker_id: r.worker_id,
            date: r.date.format("%Y-%m-%d").to_string(),
            start_time: r.start.format("%H:%M").to_string(),
            end_time: r.end.format("%H:%M").to_string(),
        })
        .collect();
    Ok(Json(intervals))
}

/// Handler to get the slot candidates for a worker, date and service.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/workers/{worker_id}/slots", // Path relative to /api
    params(
        ("worker_id" = i64, Path, description = "Worker to compute slots for"),
        DaySlotsQuery,
    ),
    responses(
        (status = 200, description = "Ordered slot candidates for the date", body = DaySlotsResponse),
        (status = 400, description = "Bad request (e.g., invalid date format, unknown service)"),
        (status = 503, description = "Booking disabled")
    ),
    tag = "booking"
))]
pub async fn day_slots_handler(
    State(state): State<Arc<BookingState>>,
    Path(worker_id): Path<i64>,
    Query(query): Query<DaySlotsQuery>,
) -> Result<Json<DaySlotsResponse>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;

    let now = local_now(state.time_zone());
    day_slots(&state.catalog, state.store.as_ref(), worker_id, &query, now)
        .map(Json)
        .map_err(error_response)
}

/// Handler to create a reservation.
#[axum::debug_handler]
pub async fn create_reservation_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<ReservationResponse>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    let now = local_now(state.time_zone());
    match create_reservation(&state.catalog, state.store.as_ref(), &payload, now) {
        Ok(reservation) => Ok(Json(ReservationResponse {
            success: true,
            reservation_id: Some(reservation.id.to_string()),
            message: "Reservation created successfully.".to_string(),
        })),
        Err(BookingError::Conflict) => Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        )),
        Err(e) => {
            log_error(&e, "Error creating reservation");
            Err(error_response(e))
        }
    }
}

/// Handler to modify an existing reservation.
#[axum::debug_handler]
pub async fn modify_reservation_handler(
    State(state): State<Arc<BookingState>>,
    Path(reservation_id): Path<Uuid>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<ReservationResponse>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    let now = local_now(state.time_zone());
    match modify_reservation(
        &state.catalog,
        state.store.as_ref(),
        reservation_id,
        &payload,
        now,
    ) {
        Ok(reservation) => Ok(Json(ReservationResponse {
            success: true,
            reservation_id: Some(reservation.id.to_string()),
            message: "Reservation modified successfully.".to_string(),
        })),
        Err(e) => {
            log_error(&e, &format!("Error modifying reservation {reservation_id}"));
            Err(error_response(e))
        }
    }
}

/// Handler to cancel a reservation without deleting it.
#[axum::debug_handler]
pub async fn cancel_reservation_handler(
    State(state): State<Arc<BookingState>>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    let now = local_now(state.time_zone());
    match cancel_reservation(state.store.as_ref(), reservation_id, now) {
        Ok(_) => Ok(Json(CancellationResponse {
            success: true,
            message: "Reservation cancelled successfully.".to_string(),
        })),
        Err(e) => {
            log_error(&e, &format!("Error cancelling reservation {reservation_id}"));
            Err(error_response(e))
        }
    }
}

/// Handler to get a client's reservation history.
#[axum::debug_handler]
pub async fn history_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ReservationHistoryResponse>, (StatusCode, String)> {
    ensure_booking_enabled(&state)?;
    let reservations = client_history(&state.catalog, state.store.as_ref(), &query.client)
        .map_err(error_response)?;
    Ok(Json(ReservationHistoryResponse { reservations }))
}

fn store_error(err: StoreError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn slot_error(err: SlotError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
