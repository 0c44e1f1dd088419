// --- File: crates/salon_booking/src/lib.rs ---
// Declare modules within this crate
pub mod catalog;
pub mod doc;
pub mod draft;
#[cfg(test)]
mod draft_test;
pub mod handlers;
pub mod logic;
pub mod routes;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
pub mod store;
