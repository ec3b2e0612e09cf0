//! Session store integration tests
//!
//! Login, logout and restore across store instances sharing a session file.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::session_store;
    use campus_tracker::auth::{
        AuthState, FileSessionStorage, INVALID_CREDENTIALS, MemorySessionStorage, SessionStorage,
    };
    use campus_tracker::core::models::{User, UserRole};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_every_mock_user_can_sign_in() {
        let store = session_store(Arc::new(MemorySessionStorage::new()));
        for email in [
            "john@student.edu",
            "jane@alumni.edu",
            "admin@university.edu",
        ] {
            let user = assert_ok!(store.login(email, "password").await);
            assert_eq!(user.email(), email);
            assert_eq!(store.current_user(), Some(user));
        }
        assert_eq!(
            store.current_user().map(|u| u.role()),
            Some(UserRole::Admin)
        );
    }

    #[tokio::test]
    async fn test_wrong_password_leaves_no_user() {
        let store = session_store(Arc::new(MemorySessionStorage::new()));
        assert!(store.login("jane@alumni.edu", "Password").await.is_err());

        let state = store.state();
        assert_eq!(state.user, None);
        assert!(!state.is_authenticated);
        assert_eq!(state.error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_session_survives_restart_until_logout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let first = session_store(Arc::new(FileSessionStorage::new(&path)));
        first.restore().await;
        let user = assert_ok!(first.login("admin@university.edu", "password").await);

        // The persisted record is the tagged user JSON
        let record = tokio::fs::read_to_string(&path).await.unwrap();
        let entries: serde_json::Value = serde_json::from_str(&record).unwrap();
        let stored: User = serde_json::from_str(entries["user"].as_str().unwrap()).unwrap();
        assert_eq!(stored, user);

        let second = session_store(Arc::new(FileSessionStorage::new(&path)));
        assert_eq!(second.restore().await, AuthState::authenticated(user));

        assert_ok!(second.logout().await);

        let third = session_store(Arc::new(FileSessionStorage::new(&path)));
        assert_eq!(third.restore().await, AuthState::unauthenticated());
    }

    #[tokio::test]
    async fn test_corrupt_session_file_entry_is_cleared() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let storage = Arc::new(FileSessionStorage::new(&path));
        storage
            .set("user", r#"{"role":"superuser"}"#.to_string())
            .await
            .unwrap();

        let store = session_store(storage.clone());
        let state = store.restore().await;

        assert!(!state.is_authenticated);
        assert_eq!(storage.get("user").await.unwrap(), None);
    }
}
