//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `AUTOBAHN_REPORT_LOG=autobahn_report=debug`.
pub const LOG_ENV: &str = "AUTOBAHN_REPORT_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber. Logs go to stderr and default to `warn`,
/// so a normal run prints nothing beyond the report itself.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
