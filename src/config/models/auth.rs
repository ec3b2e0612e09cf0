//! Authentication configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Mock authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Password accepted for every directory user
    #[serde(default = "default_mock_password")]
    pub mock_password: String,
    /// Simulated login latency
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Storage key of the persisted session record
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// File the session is persisted to; in-memory when unset
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mock_password: default_mock_password(),
            login_delay_ms: default_login_delay_ms(),
            storage_key: default_storage_key(),
            session_file: None,
        }
    }
}

impl AuthConfig {
    pub fn login_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_delay_ms)
    }

    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mock_password.is_empty() {
            return Err("Mock password cannot be empty".to_string());
        }

        if self.storage_key.trim().is_empty() {
            return Err("Storage key cannot be empty".to_string());
        }

        if self.login_delay_ms > 60_000 {
            return Err("Login delay cannot exceed 60000 ms".to_string());
        }

        Ok(())
    }
}

/// Log a warning that credentials are not really checked
pub fn warn_insecure_config(config: &AuthConfig) {
    warn!(
        "Mock authentication is active: every directory user logs in with the configured mock password. Do not expose this server publicly."
    );
    if config.session_file.is_none() {
        warn!("No session file configured; sessions will not survive a restart");
    }
}
