//! Observability seam for swallowed session failures.
//!
//! Startup token-check failures are downgraded to "unauthenticated" and
//! never reach the UI; this seam is how they stay observable. Tests
//! inject a recording implementation instead of scraping console output.

use crate::session::store::StoreError;

/// Receiver for session lifecycle failures that are not surfaced.
pub trait SessionTelemetry: Send + Sync {
    /// The startup token check failed; the session degraded to
    /// unauthenticated.
    fn startup_check_failed(&self, error: &StoreError);
}

/// Default telemetry writing to the console log.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTelemetry;

impl SessionTelemetry for ConsoleTelemetry {
    fn startup_check_failed(&self, error: &StoreError) {
        leptos::logging::error!("Auth check failed: {error}");
    }
}
