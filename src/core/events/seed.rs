//! Built-in mock events

use crate::core::models::{Event, EventId, UserId};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn ids(values: &[&str]) -> Vec<UserId> {
    values.iter().map(|v| UserId::from(*v)).collect()
}

/// Events the registry starts with when seeding is enabled
pub fn mock_events() -> Vec<Event> {
    vec![
        Event {
            id: EventId(1),
            title: "Annual Tech Symposium".to_string(),
            description: "A gathering of industry experts discussing the latest technological trends and innovations.".to_string(),
            date: at(2025, 5, 15, 10),
            location: "Main Auditorium".to_string(),
            points_awarded: 50,
            capacity: 200,
            registered_students: ids(&["1", "4", "7"]),
            attendees: ids(&["1", "4"]),
            created_by: UserId::from("3"),
            image_url: Some("https://images.pexels.com/photos/2774556/pexels-photo-2774556.jpeg".to_string()),
        },
        Event {
            id: EventId(2),
            title: "Career Development Workshop".to_string(),
            description: "Learn essential skills for job hunting, resume building, and interview techniques.".to_string(),
            date: at(2025, 6, 10, 14),
            location: "Room 101".to_string(),
            points_awarded: 30,
            capacity: 50,
            registered_students: ids(&["1", "5", "9"]),
            attendees: ids(&["1", "5"]),
            created_by: UserId::from("3"),
            image_url: Some("https://images.pexels.com/photos/3184328/pexels-photo-3184328.jpeg".to_string()),
        },
        Event {
            id: EventId(3),
            title: "Alumni Networking Event".to_string(),
            description: "Connect with successful alumni and build your professional network.".to_string(),
            date: at(2025, 7, 22, 18),
            location: "University Club".to_string(),
            points_awarded: 40,
            capacity: 100,
            registered_students: ids(&["1", "2", "6"]),
            attendees: ids(&["1", "2"]),
            created_by: UserId::from("3"),
            image_url: Some("https://images.pexels.com/photos/6224/hands-people-woman-working.jpg".to_string()),
        },
    ]
}
