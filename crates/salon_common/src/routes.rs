// --- File: crates/salon_common/src/routes.rs ---

// Route definitions shared across the application.

use axum::{routing::get, Json, Router};

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Creates a router containing common routes that can be used across the application.
///
/// # Returns
/// A router configured with common routes.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
