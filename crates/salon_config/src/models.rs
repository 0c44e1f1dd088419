// --- File: crates/salon_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// A service the salon offers, e.g. "Corte de pelo (45 min)".
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceOffering {
    pub service_id: i64,
    pub name: String,
    /// Estimated duration in minutes; also the slot length for this service.
    pub duration_minutes: i64,
    /// Inactive services are hidden from the booking flow.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkerConfig {
    pub worker_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Assignment of a worker to a service they can perform.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkerAssignment {
    pub worker_id: i64,
    pub service_id: i64,
}

/// An availability window seeded at startup, so a fresh instance is
/// bookable without first calling the admin window endpoint.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeedWindow {
    pub worker_id: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM or HH:MM:SS
    pub start_time: String,
    pub end_time: String,
}

// --- Booking Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// IANA time zone used to resolve "now" for past-slot exclusion.
    pub time_zone: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    #[serde(default)]
    pub workers: Vec<WorkerConfig>,
    #[serde(default)]
    pub assignments: Vec<WorkerAssignment>,
    #[serde(default)]
    pub seed_windows: Vec<SeedWindow>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_booking: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub booking: Option<BookingConfig>,
}
