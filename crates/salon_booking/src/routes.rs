// --- File: crates/salon_booking/src/routes.rs ---

use crate::catalog::Catalog;
use crate::handlers::{
    add_window_handler, cancel_reservation_handler, create_reservation_handler, day_slots_handler,
    history_handler, list_services_handler, modify_reservation_handler, worker_reservations_handler,
    worker_windows_handler, workers_by_service_handler, BookingState,
};
use crate::slots::{parse_wall_date, parse_wall_time};
use crate::store::{BookingStore, InMemoryBookingStore, WorkerWindow};
use axum::{
    routing::{get, post, put},
    Router,
};
use salon_config::AppConfig;
use std::sync::Arc;
use tracing::warn;

/// Seeds the store with the windows declared in configuration.
///
/// Malformed seed entries are skipped with a warning rather than aborting
/// startup; the admin endpoint can still declare windows afterwards.
fn seed_store(config: &AppConfig, store: &dyn BookingStore) {
    let Some(booking) = config.booking.as_ref() else {
        return;
    };
    for seed in &booking.seed_windows {
        let parsed = parse_wall_date(&seed.date).and_then(|date| {
            let start = parse_wall_time(&seed.start_time)?;
            let end = parse_wall_time(&seed.end_time)?;
            Ok(WorkerWindow {
                worker_id: seed.worker_id,
                date,
                start,
                end,
            })
        });
        match parsed {
            Ok(window) if window.start < window.end => {
                if let Err(e) = store.add_window(window) {
                    warn!("failed to seed window: {e}");
                }
            }
            Ok(_) => warn!(
                "skipping seed window for worker {}: end not after start",
                seed.worker_id
            ),
            Err(e) => warn!("skipping malformed seed window: {e}"),
        }
    }
}

/// Creates a router containing all routes for the booking feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let catalog = Catalog::from_config(
        config
            .booking
            .as_ref()
            .expect("Booking config missing"),
    );
    let store: Arc<dyn BookingStore> = Arc::new(InMemoryBookingStore::new());
    seed_store(&config, store.as_ref());

    let booking_state = Arc::new(BookingState {
        config,
        catalog: Arc::new(catalog),
        store,
    });

    routes_with_state(booking_state)
}

/// Router assembly over an existing state; tests inject their own store.
pub fn routes_with_state(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/services", get(list_services_handler))
        .route(
            "/services/{service_id}/workers",
            get(workers_by_service_handler),
        )
        .route(
            "/workers/{worker_id}/windows",
            get(worker_windows_handler).post(add_window_handler),
        )
        .route(
            "/workers/{worker_id}/reservations",
            get(worker_reservations_handler),
        )
        .route("/workers/{worker_id}/slots", get(day_slots_handler))
        .route(
            "/reservations",
            post(create_reservation_handler).get(history_handler),
        )
        .route(
            "/reservations/{reservation_id}",
            put(modify_reservation_handler).delete(cancel_reservation_handler),
        )
        .with_state(state)
}
