//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::{SessionStore, storage_from_config};
use crate::config::Config;
use crate::core::directory::UserDirectory;
use crate::core::events::{EventRegistry, mock_events};
use crate::core::clock::SystemClock;
use crate::core::models::{Admin, User};
use crate::utils::error::{Result, TrackerError};
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// The registry and session store are the sole owners of their data; handlers
/// only reach them through these shared handles.
#[derive(Clone)]
pub struct AppState {
    /// Tracker configuration (shared read-only)
    pub config: Arc<Config>,
    /// Known users
    pub directory: Arc<UserDirectory>,
    /// Event registry
    pub events: Arc<EventRegistry>,
    /// Session of the signed-in user
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        directory: Arc<UserDirectory>,
        events: EventRegistry,
        sessions: SessionStore,
    ) -> Self {
        Self {
            config: Arc::new(config),
            directory,
            events: Arc::new(events),
            sessions: Arc::new(sessions),
        }
    }

    /// Build every store from configuration and restore the persisted session
    pub async fn from_config(config: Config) -> Self {
        let directory = Arc::new(UserDirectory::with_mock_users());

        let seed = if config.events().seed_mock_data {
            mock_events()
        } else {
            Vec::new()
        };
        let events = EventRegistry::with_events(seed, Arc::new(SystemClock));
        info!("Event registry holds {} events", events.len());

        let sessions = SessionStore::new(
            Arc::clone(&directory),
            storage_from_config(config.auth()),
            config.auth().clone(),
        );
        sessions.restore().await;

        Self::new(config, directory, events, sessions)
    }

    /// Get tracker configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Signed-in user, or an authentication error
    pub fn current_user(&self) -> Result<User> {
        self.sessions
            .current_user()
            .ok_or_else(|| TrackerError::auth("Not signed in"))
    }

    /// Signed-in admin, or an authentication/authorization error
    pub fn require_admin(&self) -> Result<Admin> {
        match self.current_user()? {
            User::Admin(admin) => Ok(admin),
            other => Err(TrackerError::authorization(format!(
                "Admin role required, signed in as {}",
                other.role()
            ))),
        }
    }
}
