//! Registration and attendance failures

use crate::core::models::{EventId, UserId};
use thiserror::Error;

/// Why a registration or attendance change was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Event {event_id} not found")]
    NotFound { event_id: EventId },

    #[error("Event {event_id} is full ({capacity} registrations)")]
    Full { event_id: EventId, capacity: u32 },

    #[error("Student {student_id} is already registered for event {event_id}")]
    AlreadyRegistered {
        event_id: EventId,
        student_id: UserId,
    },

    #[error("Student {student_id} is not registered for event {event_id}")]
    NotRegistered {
        event_id: EventId,
        student_id: UserId,
    },

    #[error("Student {student_id} is already marked as attended for event {event_id}")]
    AlreadyAttended {
        event_id: EventId,
        student_id: UserId,
    },
}

impl RegistryError {
    /// Id of the event the failed operation targeted
    pub fn event_id(&self) -> EventId {
        match self {
            RegistryError::NotFound { event_id }
            | RegistryError::Full { event_id, .. }
            | RegistryError::AlreadyRegistered { event_id, .. }
            | RegistryError::NotRegistered { event_id, .. }
            | RegistryError::AlreadyAttended { event_id, .. } => *event_id,
        }
    }
}
