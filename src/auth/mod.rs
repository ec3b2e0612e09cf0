//! Authentication
//!
//! Mock credential checking against the user directory, the observable
//! [`AuthState`], and persistence of the signed-in user.

pub mod session;
pub mod state;
pub mod storage;

pub use session::SessionStore;
pub use state::{AuthState, INVALID_CREDENTIALS, LOGIN_FAILED};
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

use crate::config::AuthConfig;
use std::sync::Arc;
use tracing::info;

/// Storage backend selected by the auth configuration
pub fn storage_from_config(config: &AuthConfig) -> Arc<dyn SessionStorage> {
    match &config.session_file {
        Some(path) => {
            info!("Persisting sessions to {}", path.display());
            Arc::new(FileSessionStorage::new(path.clone()))
        }
        None => {
            info!("Keeping sessions in memory");
            Arc::new(MemorySessionStorage::new())
        }
    }
}
