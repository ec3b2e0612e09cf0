//! Configuration management for the tracker
//!
//! This module handles loading and validation of the tracker configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, TrackerError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the tracker
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tracker configuration
    pub tracker: TrackerConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TrackerError::Config(format!("Failed to read config file: {}", e)))?;

        let tracker: TrackerConfig = serde_yaml::from_str(&content)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { tracker };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let tracker = TrackerConfig::from_env()?;
        let config = Self { tracker };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.tracker.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.tracker.auth
    }

    /// Get events configuration
    pub fn events(&self) -> &EventsConfig {
        &self.tracker.events
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.tracker.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.tracker
            .server
            .validate()
            .map_err(|e| TrackerError::Config(format!("Server config error: {}", e)))?;

        self.tracker
            .auth
            .validate()
            .map_err(|e| TrackerError::Config(format!("Auth config error: {}", e)))?;

        self.tracker
            .events
            .validate()
            .map_err(|e| TrackerError::Config(format!("Events config error: {}", e)))?;

        self.tracker
            .logging
            .validate()
            .map_err(|e| TrackerError::Config(format!("Logging config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.tracker.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.tracker)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.tracker)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
