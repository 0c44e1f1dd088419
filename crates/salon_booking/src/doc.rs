// File: crates/salon_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AddWindowRequest, CancellationResponse, CreateReservationRequest, DaySlotsQuery,
    DaySlotsResponse, ReservationHistoryResponse, ReservationResponse, ReservationView,
    ServiceView, SlotView, WindowView, WorkerView,
};

#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "Active service offerings", body = Vec<ServiceView>),
        (status = 503, description = "Booking disabled", body = String)
    )
)]
fn doc_list_services_handler() {}

#[utoipa::path(
    get,
    path = "/services/{service_id}/workers",
    params(
        ("service_id" = i64, Path, description = "The service to list workers for")
    ),
    responses(
        (status = 200, description = "Workers assigned to the service", body = Vec<WorkerView>),
        (status = 404, description = "Unknown service", body = String)
    )
)]
fn doc_workers_by_service_handler() {}

#[utoipa::path(
    get,
    path = "/workers/{worker_id}/slots",
    params(
        ("worker_id" = i64, Path, description = "Worker to compute slots for"),
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2026-09-03", format = "date"),
        ("service_id" = i64, Query, description = "Service whose duration defines the slot length", example = 2)
    ),
    responses(
        (status = 200, description = "Ordered slot candidates", body = DaySlotsResponse),
        (status = 400, description = "Invalid date or unknown service", body = String),
        (status = 503, description = "Booking disabled", body = String)
    )
)]
fn doc_day_slots_handler() {}

#[utoipa::path(
    post,
    path = "/workers/{worker_id}/windows",
    params(
        ("worker_id" = i64, Path, description = "Worker declaring availability")
    ),
    request_body(content = AddWindowRequest, example = json!({
        "date": "2026-09-03",
        "start_time": "09:00",
        "end_time": "13:00"
    })),
    responses(
        (status = 200, description = "Declared window", body = WindowView),
        (status = 400, description = "Malformed date or time", body = String),
        (status = 404, description = "Unknown worker", body = String)
    )
)]
fn doc_add_window_handler() {}

#[utoipa::path(
    post,
    path = "/reservations",
    request_body(content = CreateReservationRequest, example = json!({
        "worker_id": 1,
        "service_id": 2,
        "date": "2026-09-03",
        "start_time": "09:30",
        "end_time": "10:00",
        "client_name": "Lucia"
    })),
    responses(
        (status = 200, description = "Reservation result", body = ReservationResponse,
         example = json!({
             "success": true,
             "reservation_id": "123e4567-e89b-12d3-a456-426614174000",
             "message": "Reservation created successfully."
         })
        ),
        (status = 409, description = "Slot already booked",
         example = json!("Requested time slot is no longer available.")
        ),
        (status = 400, description = "Validation failed", body = String)
    )
)]
fn doc_create_reservation_handler() {}

#[utoipa::path(
    put,
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "The reservation to modify")
    ),
    request_body(content = CreateReservationRequest),
    responses(
        (status = 200, description = "Modification result", body = ReservationResponse),
        (status = 404, description = "Reservation not found", body = String),
        (status = 409, description = "New slot conflicts or reservation already cancelled", body = String)
    )
)]
fn doc_modify_reservation_handler() {}

#[utoipa::path(
    delete,
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = String, Path, description = "The reservation to cancel")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = CancellationResponse,
         example = json!({
             "success": true,
             "message": "Reservation cancelled successfully."
         })
        ),
        (status = 404, description = "Reservation not found", body = String),
        (status = 409, description = "Already cancelled", body = String)
    )
)]
fn doc_cancel_reservation_handler() {}

#[utoipa::path(
    get,
    path = "/reservations",
    params(
        ("client" = String, Query, description = "Client whose history to return")
    ),
    responses(
        (status = 200, description = "Reservation history, cancelled entries excluded", body = ReservationHistoryResponse)
    )
)]
fn doc_history_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_services_handler,
        doc_workers_by_service_handler,
        doc_day_slots_handler,
        doc_add_window_handler,
        doc_create_reservation_handler,
        doc_modify_reservation_handler,
        doc_cancel_reservation_handler,
        doc_history_handler
    ),
    components(
        schemas(
            crate::slots::SlotStatus,
            crate::store::ReservationStatus,
            DaySlotsQuery,
            DaySlotsResponse,
            SlotView,
            AddWindowRequest,
            WindowView,
            CreateReservationRequest,
            ReservationResponse,
            CancellationResponse,
            ReservationHistoryResponse,
            ReservationView,
            ServiceView,
            WorkerView
        )
    ),
    tags(
        (name = "booking", description = "Salon Booking API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingApiDoc;
