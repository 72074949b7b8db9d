//! # Logging
//!
//! Structured logs via `tracing`. The level comes from `RUST_LOG` and falls
//! back to `info`:
//!
//! ```bash
//! RUST_LOG=info pizza-store     # order placed/updated, HTTP requests
//! RUST_LOG=debug pizza-store    # full request payloads and patches
//! RUST_LOG=pizza_store=debug,tower_http=warn pizza-store
//! ```
//!
//! The store actor tags its events with `entity_type` instead of a module
//! path, so targets are hidden.

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber. Call once, before serving.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
