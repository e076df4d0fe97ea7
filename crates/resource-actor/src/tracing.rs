//! # Observability & Tracing
//!
//! Subscriber setup shared by every binary built on the resource actors.
//!
//! Actors emit structured events keyed by `entity_type` and `id`:
//!
//! ```text
//! INFO Actor started entity_type="Product" size=1
//! INFO Created entity_type="Customer" id=0 size=1
//! WARN on_create failed entity_type="Order" error=Customer with ID=7 does not exist.
//! ```
//!
//! Levels come from `RUST_LOG` (`info` when unset):
//!
//! ```bash
//! RUST_LOG=info cargo run     # state changes only
//! RUST_LOG=debug cargo run    # full payloads on every request
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false) // entity_type already identifies the source
        .compact()
        .try_init();
}
