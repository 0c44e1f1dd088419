// --- File: crates/salon_common/src/error.rs ---

/// A trait for converting errors to HTTP status codes.
///
/// Each feature crate keeps its own error enum; implementing this trait is
/// how the enum tells the HTTP layer which status each variant maps to.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}
