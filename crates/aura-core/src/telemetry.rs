//! Observability for Aura.
//! `tracing` crate with `EnvFilter`, per-subsystem log levels.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Aura tracing/logging system.
///
/// Reads the `AURA_LOG` environment variable for per-subsystem log levels.
/// Format: `AURA_LOG=aura_features=debug,aura_cache=info`
///
/// Falls back to `aura=info` if `AURA_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("AURA_LOG").unwrap_or_else(|_| EnvFilter::new("aura=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
