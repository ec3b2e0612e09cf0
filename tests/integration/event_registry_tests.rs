//! Event registry integration tests
//!
//! Registration, attendance and time partitioning through the public API.

#[cfg(test)]
mod tests {
    use crate::common::{EventFactory, fixed_now, registry_at, seeded_registry};
    use crate::{assert_err, assert_ok};
    use campus_tracker::core::dashboard::Dashboard;
    use campus_tracker::core::directory::UserDirectory;
    use campus_tracker::core::events::RegistryError;
    use campus_tracker::core::models::{EventId, EventStatus, UserId};
    use chrono::Duration;
    use std::collections::HashSet;

    fn student(id: &str) -> UserId {
        UserId::from(id)
    }

    /// Capacity 2: A ok, A again rejected, B ok, C rejected
    #[test]
    fn test_capacity_two_walkthrough() {
        let (registry, _) = registry_at(fixed_now());
        let event = registry.add(EventFactory::with_capacity(2));

        let after_a = assert_ok!(registry.register(event.id, &student("A")));
        assert_eq!(after_a.registered_students, vec![student("A")]);

        let err = assert_err!(registry.register(event.id, &student("A")));
        assert!(matches!(err, RegistryError::AlreadyRegistered { .. }));

        let after_b = assert_ok!(registry.register(event.id, &student("B")));
        assert_eq!(after_b.registered_students, vec![student("A"), student("B")]);

        let err = assert_err!(registry.register(event.id, &student("C")));
        assert_eq!(
            err,
            RegistryError::Full {
                event_id: event.id,
                capacity: 2
            }
        );
    }

    #[test]
    fn test_attendance_requires_registration_once() {
        let registry = seeded_registry();

        // Student 9 is registered for event 2 but has not attended yet
        let err = assert_err!(registry.mark_attendance(EventId(1), &student("9")));
        assert!(matches!(err, RegistryError::NotRegistered { .. }));

        assert_ok!(registry.mark_attendance(EventId(2), &student("9")));
        let err = assert_err!(registry.mark_attendance(EventId(2), &student("9")));
        assert!(matches!(err, RegistryError::AlreadyAttended { .. }));

        let event = registry.by_id(EventId(2)).unwrap();
        assert_eq!(event.attendees.len(), 3);
        assert!(event.attendees.iter().all(|a| event.is_registered(a)));
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let (registry, clock) = registry_at(fixed_now());
        for offset in [-48, -1, 0, 1, 48] {
            registry.add(EventFactory::at(fixed_now() + Duration::hours(offset)));
        }

        let check = |expected_upcoming: usize| {
            let upcoming: HashSet<EventId> = registry.upcoming().iter().map(|e| e.id).collect();
            let past: HashSet<EventId> = registry.past().iter().map(|e| e.id).collect();
            assert!(upcoming.is_disjoint(&past));
            assert_eq!(upcoming.len() + past.len(), registry.len());
            assert_eq!(upcoming.len(), expected_upcoming);
        };

        check(2);
        clock.advance(Duration::hours(1));
        check(1);
        clock.set(fixed_now() - Duration::days(30));
        check(5);
    }

    #[test]
    fn test_status_transitions() {
        let (registry, clock) = registry_at(fixed_now());
        let event = registry.add(EventFactory::with_capacity(1));
        assert_eq!(registry.status(&event), EventStatus::Open);

        let event = assert_ok!(registry.register(event.id, &student("A")));
        assert_eq!(registry.status(&event), EventStatus::Full);

        clock.advance(Duration::weeks(2));
        assert_eq!(registry.status(&event), EventStatus::Closed);
    }

    #[test]
    fn test_added_ids_never_collide() {
        let registry = seeded_registry();
        let ids: Vec<EventId> = (0..5).map(|_| registry.add(EventFactory::create()).id).collect();

        assert_eq!(
            ids,
            vec![EventId(4), EventId(5), EventId(6), EventId(7), EventId(8)]
        );
        let unique: HashSet<EventId> = registry.all().iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn test_registration_shows_on_student_dashboard() {
        let registry = seeded_registry();
        let directory = UserDirectory::with_mock_users();
        let sarah = directory.find_by_email("sarah@student.edu").unwrap();

        assert_ok!(registry.register(EventId(3), sarah.id()));

        let Dashboard::Student(dashboard) = Dashboard::for_user(sarah, &registry, &directory) else {
            panic!("expected a student dashboard");
        };
        let networking = dashboard
            .upcoming_events
            .iter()
            .find(|e| e.event.id == EventId(3))
            .unwrap();
        assert!(networking.participation.registered);
        assert!(!networking.participation.attended);
    }
}
