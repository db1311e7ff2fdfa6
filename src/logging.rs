//! `tracing` subscriber setup for applications embedding the crate.
//!
//! The library itself only emits events; installing a subscriber is left
//! to the host, or to tests through `init_for_tests`.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::{PlanningError, PlanningResult};

/// Installs a global fmt subscriber for applications embedding the crate.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g.
/// `"workforce_planning=debug"`).
pub fn init(default_directive: &str) -> PlanningResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| PlanningError::Config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| PlanningError::Config(format!("logging already initialized: {e}")))?;

    info!("Logging initialized");
    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("workforce_planning=debug".parse().unwrap());

        // Another test harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
