//! Observable authentication state

use crate::core::models::User;
use serde::{Deserialize, Serialize};

/// Error shown when the email or password does not match
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Error shown when a matched user could not be persisted
pub const LOGIN_FAILED: &str = "An error occurred during login";

/// Snapshot of the session as clients see it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// State before the persisted session has been checked
    pub fn loading() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }

    /// Unauthenticated with a message for the user
    pub fn failed<S: Into<String>>(error: S) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::unauthenticated()
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}
