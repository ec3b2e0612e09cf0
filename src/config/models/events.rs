//! Event registry configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Event registry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Start with the built-in mock events
    #[serde(default = "default_true")]
    pub seed_mock_data: bool,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            seed_mock_data: true,
        }
    }
}

impl EventsConfig {
    pub fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
