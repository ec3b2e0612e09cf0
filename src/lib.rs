//! # Campus Tracker
//!
//! Role-based tracking service for students, alumni and administrators.
//!
//! ## Features
//!
//! - **Event registry**: capacity-checked registration and attendance marking
//! - **Session store**: mock sign-in persisted across restarts
//! - **Dashboards**: per-role summaries over the same data
//! - **HTTP API**: JSON endpoints served by actix-web
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campus_tracker::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/tracker.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::{AuthState, SessionStore};
pub use config::Config;
pub use crate::core::events::{EventRegistry, RegistryError};
pub use crate::core::models::{Event, EventId, User, UserId, UserRole};
pub use utils::error::{Result, TrackerError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Tracker build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build information captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
