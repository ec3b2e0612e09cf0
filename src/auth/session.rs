//! Session store
//!
//! Holds the single signed-in user of the running tracker and mirrors it to
//! a [`SessionStorage`] backend so a restart can pick the session back up.
//!
//! Every login and logout draws a ticket. A login only commits its outcome if
//! no newer login or logout started while it was waiting, so the latest
//! request always decides the final state.

use super::state::{AuthState, INVALID_CREDENTIALS, LOGIN_FAILED};
use super::storage::SessionStorage;
use crate::config::AuthConfig;
use crate::core::directory::UserDirectory;
use crate::core::models::User;
use crate::utils::error::{Result, TrackerError};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info, warn};

/// Owner of the authentication state
pub struct SessionStore {
    directory: Arc<UserDirectory>,
    storage: Arc<dyn SessionStorage>,
    config: AuthConfig,
    state: RwLock<AuthState>,
    ticket: AtomicU64,
    commit: tokio::sync::Mutex<()>,
}

impl SessionStore {
    /// Store in the loading state; call [`SessionStore::restore`] next
    pub fn new(
        directory: Arc<UserDirectory>,
        storage: Arc<dyn SessionStorage>,
        config: AuthConfig,
    ) -> Self {
        Self {
            directory,
            storage,
            config,
            state: RwLock::new(AuthState::loading()),
            ticket: AtomicU64::new(0),
            commit: tokio::sync::Mutex::new(()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    /// Signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        let state = self.state.read();
        if state.is_authenticated {
            state.user.clone()
        } else {
            None
        }
    }

    /// Load the persisted session
    ///
    /// A record that cannot be read back as a user is discarded and the
    /// session starts signed out.
    pub async fn restore(&self) -> AuthState {
        let key = &self.config.storage_key;
        let _guard = self.commit.lock().await;

        let restored = match self.storage.get(key).await {
            Ok(Some(record)) => match serde_json::from_str::<User>(&record) {
                Ok(user) => {
                    info!("Restored session for {}", user.email());
                    AuthState::authenticated(user)
                }
                Err(e) => {
                    warn!("Discarding unreadable session record: {}", e);
                    if let Err(e) = self.storage.remove(key).await {
                        error!("Failed to remove unreadable session record: {}", e);
                    }
                    AuthState::unauthenticated()
                }
            },
            Ok(None) => {
                debug!("No persisted session");
                AuthState::unauthenticated()
            }
            Err(e) => {
                error!("Failed to read persisted session: {}", e);
                AuthState::unauthenticated()
            }
        };

        *self.state.write() = restored.clone();
        restored
    }

    /// Sign in with email and password
    ///
    /// Returns a [`TrackerError::Session`] without touching state if a newer
    /// login or logout started during the simulated delay.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let ticket = self.next_ticket();
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
        }
        let _pending = PendingLogin {
            store: self,
            ticket,
        };

        tokio::time::sleep(self.config.login_delay()).await;

        let _guard = self.commit.lock().await;
        if self.ticket.load(Ordering::SeqCst) != ticket {
            warn!("Login for {} superseded by a newer request", email);
            return Err(TrackerError::session("Login superseded by a newer request"));
        }

        let user = match self.directory.find_by_email(email) {
            Some(user) if password == self.config.mock_password => user.clone(),
            _ => {
                warn!("Rejected login for {}", email);
                *self.state.write() = AuthState::failed(INVALID_CREDENTIALS);
                return Err(TrackerError::auth(INVALID_CREDENTIALS));
            }
        };

        if let Err(e) = self.persist(&user).await {
            error!("Failed to persist session for {}: {}", email, e);
            *self.state.write() = AuthState::failed(LOGIN_FAILED);
            return Err(e);
        }

        info!("User {} logged in as {}", user.email(), user.role());
        *self.state.write() = AuthState::authenticated(user.clone());
        Ok(user)
    }

    /// Sign out and clear the persisted session
    ///
    /// The in-memory session is cleared even if the backend fails; the error
    /// is still returned.
    pub async fn logout(&self) -> Result<()> {
        self.next_ticket();
        let _guard = self.commit.lock().await;

        let removed = self.storage.remove(&self.config.storage_key).await;
        *self.state.write() = AuthState::unauthenticated();

        match removed {
            Ok(()) => {
                info!("User logged out");
                Ok(())
            }
            Err(e) => {
                error!("Failed to clear persisted session: {}", e);
                Err(e)
            }
        }
    }

    fn next_ticket(&self) -> u64 {
        self.ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn persist(&self, user: &User) -> Result<()> {
        let record = serde_json::to_string(user)?;
        self.storage.set(&self.config.storage_key, record).await
    }
}

/// Clears the loading flag if a login is dropped before it commits
struct PendingLogin<'a> {
    store: &'a SessionStore,
    ticket: u64,
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        let mut state = self.store.state.write();
        // A newer login owns the flag now
        if self.store.ticket.load(Ordering::SeqCst) == self.ticket && state.is_loading {
            debug!("Login abandoned before completing");
            state.is_loading = false;
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.state.read())
            .field("storage_key", &self.config.storage_key)
            .finish()
    }
}
