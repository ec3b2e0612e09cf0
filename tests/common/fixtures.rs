//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use campus_tracker::auth::{SessionStorage, SessionStore};
use campus_tracker::config::AuthConfig;
use campus_tracker::core::clock::MockClock;
use campus_tracker::core::directory::UserDirectory;
use campus_tracker::core::events::{EventRegistry, mock_events};
use campus_tracker::core::models::{NewEvent, UserId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

/// Reference "now" shared by the fixtures: between the seeded May and June events
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Empty registry reading time from a controllable clock
pub fn registry_at(now: DateTime<Utc>) -> (EventRegistry, MockClock) {
    let clock = MockClock::new(now);
    let registry = EventRegistry::with_events(Vec::new(), Arc::new(clock.clone()));
    (registry, clock)
}

/// Registry seeded with the built-in events at [`fixed_now`]
pub fn seeded_registry() -> EventRegistry {
    EventRegistry::with_events(mock_events(), Arc::new(MockClock::new(fixed_now())))
}

/// Session store over the mock directory with no login delay
pub fn session_store(storage: Arc<dyn SessionStorage>) -> SessionStore {
    SessionStore::new(
        Arc::new(UserDirectory::with_mock_users()),
        storage,
        AuthConfig {
            login_delay_ms: 0,
            ..AuthConfig::default()
        },
    )
}

/// Factory for creating new events
pub struct EventFactory;

impl EventFactory {
    /// Event a week after [`fixed_now`] with room for 10
    pub fn create() -> NewEvent {
        Self::at(fixed_now() + Duration::weeks(1))
    }

    /// Event at a specific time
    pub fn at(date: DateTime<Utc>) -> NewEvent {
        NewEvent {
            title: "Research Showcase".to_string(),
            description: "Final-year projects on display".to_string(),
            date,
            location: "Engineering Atrium".to_string(),
            points_awarded: 25,
            capacity: 10,
            created_by: UserId::from("3"),
            image_url: None,
        }
    }

    /// Event with a specific capacity
    pub fn with_capacity(capacity: u32) -> NewEvent {
        NewEvent {
            capacity,
            ..Self::create()
        }
    }
}
