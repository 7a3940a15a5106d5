//! Tracing/logging setup and operation timing.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Start/stop timing around individual operations.
pub mod observation;

pub use observation::{
    LoggingObservationHandler, Observation, ObservationHandler, ObservationRegistry, Outcome,
};
