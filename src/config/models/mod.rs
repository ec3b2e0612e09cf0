//! Configuration data models
//!
//! This module defines all configuration structures used by the tracker.

#![allow(missing_docs)]

pub mod auth;
pub mod events;
pub mod logging;
pub mod server;
pub mod tracker;

// Re-export all configuration types
pub use auth::*;
pub use events::*;
pub use logging::*;
pub use server::*;
pub use tracker::*;

/// Default values for configuration
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Password every mock user logs in with
pub fn default_mock_password() -> String {
    "password".to_string()
}

/// Simulated login latency in milliseconds
pub fn default_login_delay_ms() -> u64 {
    1000
}

/// Key the session record is stored under
pub fn default_storage_key() -> String {
    "user".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
