//! Logging setup
//!
//! Installs the global `tracing` subscriber. The filter comes from `RUST_LOG`
//! when set, otherwise from the configured level.

use crate::config::LoggingConfig;
use crate::utils::error::{Result, TrackerError};
use tracing_subscriber::EnvFilter;

/// Build the filter, preferring `RUST_LOG` over the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            TrackerError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TrackerError::internal(format!("Failed to initialize logging: {}", e)))
}
