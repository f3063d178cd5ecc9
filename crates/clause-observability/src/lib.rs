//! # clause-observability
//!
//! Tracing setup: structured logging to stderr, filtered by `CLAUSE_LOG`.

use std::sync::Once;

use clause_core::config::ObservabilityConfig;
use clause_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `CLAUSE_LOG` environment variable for filter directives,
/// e.g. `CLAUSE_LOG=clause_analysis=debug,info`. Falls back to the
/// configured log level if not set or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let registry = tracing_subscriber::registry().with(filter);

        let result = if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };

        // Another subscriber (e.g. a test harness) may already be installed.
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already set");
        }
    });
}

fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}
