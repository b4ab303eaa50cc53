//! Logging initialization for the pledge portal.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// Called once at startup. `RUST_LOG` overrides the default filter, which
/// logs the portal and actix at info level.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pledge_portal=info,actix_web=info"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true));

    // Ignore the error if a subscriber is already installed (tests).
    let _ = subscriber.try_init();
}
