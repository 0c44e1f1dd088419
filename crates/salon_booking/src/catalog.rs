// --- File: crates/salon_booking/src/catalog.rs ---
//! The service/worker catalog, built from configuration.
//!
//! Services, workers and their assignments are operator data that changes
//! rarely; they live in the config file the same way price tiers do in
//! other deployments, and the catalog gives O(1) lookups over them.

use salon_config::{BookingConfig, ServiceOffering, WorkerConfig};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceOffering>,
    workers: Vec<WorkerConfig>,
    service_index: HashMap<i64, usize>,
    worker_index: HashMap<i64, usize>,
    assignments: HashSet<(i64, i64)>, // (worker_id, service_id)
}

impl Catalog {
    pub fn from_config(config: &BookingConfig) -> Self {
        let service_index = config
            .services
            .iter()
            .enumerate()
            .map(|(i, s)| (s.service_id, i))
            .collect();
        let worker_index = config
            .workers
            .iter()
            .enumerate()
            .map(|(i, w)| (w.worker_id, i))
            .collect();
        let assignments = config
            .assignments
            .iter()
            .map(|a| (a.worker_id, a.service_id))
            .collect();
        Self {
            services: config.services.clone(),
            workers: config.workers.clone(),
            service_index,
            worker_index,
            assignments,
        }
    }

    /// Services shown in the booking flow, inactive ones filtered out.
    pub fn active_services(&self) -> Vec<&ServiceOffering> {
        self.services.iter().filter(|s| s.active).collect()
    }

    pub fn service(&self, service_id: i64) -> Option<&ServiceOffering> {
        self.service_index
            .get(&service_id)
            .map(|&i| &self.services[i])
    }

    pub fn worker(&self, worker_id: i64) -> Option<&WorkerConfig> {
        self.worker_index.get(&worker_id).map(|&i| &self.workers[i])
    }

    /// Whether the worker is assigned to perform the service.
    pub fn worker_offers(&self, worker_id: i64, service_id: i64) -> bool {
        self.assignments.contains(&(worker_id, service_id))
    }

    pub fn workers_for_service(&self, service_id: i64) -> Vec<&WorkerConfig> {
        self.workers
            .iter()
            .filter(|w| self.assignments.contains(&(w.worker_id, service_id)))
            .collect()
    }
}
