//! Event records

use super::{EventId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campus event that students register for and attend
///
/// `attendees` is always a subset of `registered_students`, and neither list
/// holds duplicates. The registry is the only writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// When the event takes place
    pub date: DateTime<Utc>,
    pub location: String,
    /// Points credited to attending students
    pub points_awarded: u32,
    /// Maximum number of registrations
    pub capacity: u32,
    pub registered_students: Vec<UserId>,
    pub attendees: Vec<UserId>,
    /// Admin who created the event
    pub created_by: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    pub fn is_registered(&self, student_id: &UserId) -> bool {
        self.registered_students.contains(student_id)
    }

    pub fn has_attended(&self, student_id: &UserId) -> bool {
        self.attendees.contains(student_id)
    }

    pub fn registered_count(&self) -> usize {
        self.registered_students.len()
    }

    /// Whether every capacity slot is taken
    pub fn is_full(&self) -> bool {
        self.registered_students.len() >= self.capacity as usize
    }

    pub fn available_spots(&self) -> u32 {
        (self.capacity as usize).saturating_sub(self.registered_students.len()) as u32
    }

    /// Strictly after `now`; an event happening right now counts as past
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    /// Registration status as shown on dashboards
    pub fn status(&self, now: DateTime<Utc>) -> EventStatus {
        if !self.is_upcoming(now) {
            EventStatus::Closed
        } else if self.is_full() {
            EventStatus::Full
        } else {
            EventStatus::Open
        }
    }
}

/// Registration status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Upcoming with spots left
    Open,
    /// Upcoming and at capacity
    Full,
    /// Already happened
    Closed,
}

/// Data for a new event; the registry assigns the id and starts both lists empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub points_awarded: u32,
    pub capacity: u32,
    pub created_by: UserId,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewEvent {
    pub(crate) fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            points_awarded: self.points_awarded,
            capacity: self.capacity,
            registered_students: Vec::new(),
            attendees: Vec::new(),
            created_by: self.created_by,
            image_url: self.image_url,
        }
    }
}
