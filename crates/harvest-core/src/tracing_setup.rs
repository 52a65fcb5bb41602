//! Tracing initialization.
//!
//! Library code only emits events; the binary or test harness that owns the
//! process calls [`init_tracing`] once.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads the `HARVEST_LOG` environment variable for filter directives
/// (e.g. `HARVEST_LOG=harvest_routing=trace,harvest_provenance=debug`),
/// falling back to `config.log_level`.
///
/// Idempotent: only the first call has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        // Another subscriber may already be installed by the host process.
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already installed");
        }
    });
}
