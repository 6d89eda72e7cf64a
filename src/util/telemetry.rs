//! Telemetry helpers for structured logging.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "temporal_priority_queue=info";

/// Install a default fmt subscriber if the application has not set one.
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_LOG_DIRECTIVE`].
/// Queue operations log at `trace`, so `RUST_LOG=temporal_priority_queue=trace`
/// shows every enqueue and dequeue.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
