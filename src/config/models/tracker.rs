//! Main tracker configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Event registry configuration
    #[serde(default)]
    pub events: EventsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TrackerConfig {
    /// Defaults overridden by `TRACKER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("TRACKER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("TRACKER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| TrackerError::Config(format!("Invalid TRACKER_PORT '{}': {}", port, e)))?;
        }
        if let Some(path) = lookup("TRACKER_SESSION_FILE") {
            config.auth.session_file = Some(PathBuf::from(path));
        }
        if let Some(delay) = lookup("TRACKER_LOGIN_DELAY_MS") {
            config.auth.login_delay_ms = delay.parse().map_err(|e| {
                TrackerError::Config(format!("Invalid TRACKER_LOGIN_DELAY_MS '{}': {}", delay, e))
            })?;
        }
        if let Some(level) = lookup("TRACKER_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }
}
