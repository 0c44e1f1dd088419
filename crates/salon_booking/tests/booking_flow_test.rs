// End-to-end booking flow against the router, no network involved.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use salon_booking::catalog::Catalog;
use salon_booking::handlers::BookingState;
use salon_booking::routes::{routes, routes_with_state};
use salon_booking::store::{BookingStore, InMemoryBookingStore};
use salon_config::{
    AppConfig, BookingConfig, SeedWindow, ServerConfig, ServiceOffering, WorkerAssignment,
    WorkerConfig,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        use_booking: true,
        booking: Some(BookingConfig {
            time_zone: Some("Europe/Madrid".to_string()),
            services: vec![ServiceOffering {
                service_id: 1,
                name: "Corte de pelo".to_string(),
                duration_minutes: 30,
                active: true,
            }],
            workers: vec![WorkerConfig {
                worker_id: 7,
                first_name: "Fernanda".to_string(),
                last_name: "Ríos".to_string(),
            }],
            assignments: vec![WorkerAssignment {
                worker_id: 7,
                service_id: 1,
            }],
            // Far in the future so the past-time cut never applies.
            seed_windows: vec![SeedWindow {
                worker_id: 7,
                date: "2099-06-01".to_string(),
                start_time: "09:00".to_string(),
                end_time: "11:00".to_string(),
            }],
        }),
    })
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_full_booking_flow() {
    let app = routes(test_config());

    // Catalog endpoints.
    let (status, services) = send(&app, get("/services")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(services[0]["service_id"], 1);

    let (status, workers) = send(&app, get("/services/1/workers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workers[0]["first_name"], "Fernanda");

    // Seeded window is visible.
    let (status, windows) = send(&app, get("/workers/7/windows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(windows[0]["date"], "2099-06-01");

    // All four slots start out bookable.
    let (status, slots) = send(
        &app,
        get("/workers/7/slots?date=2099-06-01&service_id=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slots["slots"].as_array().unwrap().len(), 4);
    assert_eq!(slots["slots"][0]["status"], "bookable");

    // Book the first slot.
    let payload = json!({
        "worker_id": 7,
        "service_id": 1,
        "date": "2099-06-01",
        "start_time": "09:00",
        "end_time": "09:30",
        "client_name": "Lucia"
    });
    let (status, created) = send(&app, json_request("POST", "/reservations", payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    let reservation_id = created["reservation_id"].as_str().unwrap().to_string();

    // The same slot is now occupied and a second booking conflicts.
    let (_, slots) = send(
        &app,
        get("/workers/7/slots?date=2099-06-01&service_id=1"),
    )
    .await;
    assert_eq!(slots["slots"][0]["status"], "occupied");
    assert_eq!(slots["slots"][1]["status"], "bookable");

    let (status, _) = send(&app, json_request("POST", "/reservations", payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Modify to a later slot.
    let moved = json!({
        "worker_id": 7,
        "service_id": 1,
        "date": "2099-06-01",
        "start_time": "10:00",
        "client_name": "Lucia"
    });
    let (status, modified) = send(
        &app,
        json_request("PUT", &format!("/reservations/{reservation_id}"), moved),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(modified["success"], true);

    // History shows the moved reservation with resolved names.
    let (status, history) = send(&app, get("/reservations?client=Lucia")).await;
    assert_eq!(status, StatusCode::OK);
    let entries = history["reservations"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["start_time"], "10:00");
    assert_eq!(entries[0]["worker_name"], "Fernanda Ríos");

    // Cancel and verify it disappears from history but stays addressable.
    let (status, cancelled) = send(
        &app,
        json_request(
            "DELETE",
            &format!("/reservations/{reservation_id}"),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["success"], true);

    let (_, history) = send(&app, get("/reservations?client=Lucia")).await;
    assert!(history["reservations"].as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        json_request(
            "DELETE",
            &format!("/reservations/{reservation_id}"),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_disabled_booking_returns_service_unavailable() {
    let mut config = test_config().as_ref().clone();
    config.use_booking = false;
    let config = Arc::new(config);

    let store = Arc::new(InMemoryBookingStore::new());
    let catalog = Catalog::from_config(config.booking.as_ref().unwrap());
    let app = routes_with_state(Arc::new(BookingState {
        config,
        catalog: Arc::new(catalog),
        store: store.clone(),
    }));

    let (status, _) = send(&app, get("/services")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Writes are gated too; the store must stay untouched.
    let payload = json!({
        "worker_id": 7,
        "service_id": 1,
        "date": "2099-06-01",
        "start_time": "09:00",
        "client_name": "Lucia"
    });
    let (status, _) = send(&app, json_request("POST", "/reservations", payload)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/workers/7/windows",
            json!({"date": "2099-06-02", "start_time": "09:00", "end_time": "10:00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, get("/reservations?client=Lucia")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    assert!(store.reservations_for_client("Lucia").unwrap().is_empty());
    assert!(store.windows_for_worker(7).unwrap().is_empty());
}

#[tokio::test]
async fn test_declare_window_then_book() {
    let app = routes(test_config());

    let (status, window) = send(
        &app,
        json_request(
            "POST",
            "/workers/7/windows",
            json!({"date": "2099-06-02", "start_time": "15:00", "end_time": "16:00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(window["start_time"], "15:00");

    let (status, slots) = send(
        &app,
        get("/workers/7/slots?date=2099-06-02&service_id=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slots["slots"].as_array().unwrap().len(), 2);

    // Malformed window declarations are rejected.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/workers/7/windows",
            json!({"date": "2099-06-02", "start_time": "16:00", "end_time": "15:00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/workers/7/windows",
            json!({"date": "not-a-date", "start_time": "09:00", "end_time": "10:00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = routes(test_config());

    let (status, _) = send(&app, get("/services/99/workers")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/workers/99/windows")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request(
            "DELETE",
            &format!("/reservations/{}", uuid::Uuid::new_v4()),
            Value::Null,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
