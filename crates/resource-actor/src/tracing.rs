//! # Observability
//!
//! Tracing setup shared by every binary and integration test in the
//! workspace. Uses a compact single-line format with the module path hidden;
//! verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events
//! RUST_LOG=debug cargo run     # full request payloads
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Safe to call more than once (subsequent calls are no-ops), so tests can
/// call it without coordinating.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
