//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tome_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for log filtering.
pub const LOG_ENV_VAR: &str = "TOME_LOG";

/// Install the default subscriber: `info`, JSON output, unless `TOME_LOG`
/// says otherwise. Returns `false` if a global subscriber already exists.
pub fn init_tracing() -> bool {
    init_tracing_from_config(&ObservabilityConfig::default())
}

/// Initialize tracing from the `[observability]` config section.
///
/// `TOME_LOG` still wins over `log_level` when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs)
}

/// Install a JSON subscriber with an explicit filter, ignoring `TOME_LOG`.
/// Intended for embedding and tests.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
