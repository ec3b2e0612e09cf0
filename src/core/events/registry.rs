//! In-memory event registry

use super::error::RegistryError;
use super::stats::{EventSummary, Participation, RegistryStats, percent_of};
use crate::core::clock::{Clock, SystemClock};
use crate::core::models::{Event, EventId, EventStatus, NewEvent, UserId};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Owner of the event list
///
/// Records are stored as shared snapshots. A mutation builds a new record and
/// swaps it in under the write lock, so readers holding an older `Arc<Event>`
/// never observe a half-applied change.
pub struct EventRegistry {
    events: RwLock<Vec<Arc<Event>>>,
    next_id: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl EventRegistry {
    /// Empty registry using the system clock
    pub fn new() -> Self {
        Self::with_events(Vec::new(), Arc::new(SystemClock))
    }

    /// Registry holding `events`, reading time from `clock`
    pub fn with_events(events: Vec<Event>, clock: Arc<dyn Clock>) -> Self {
        let next_id = events.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        Self {
            events: RwLock::new(events.into_iter().map(Arc::new).collect()),
            next_id: AtomicU64::new(next_id),
            clock,
        }
    }

    /// Current time as seen by the registry
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Every event, in insertion order
    pub fn all(&self) -> Vec<Arc<Event>> {
        self.events.read().clone()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    pub fn by_id(&self, id: EventId) -> Option<Arc<Event>> {
        debug!("Looking up event {}", id);
        self.events.read().iter().find(|e| e.id == id).cloned()
    }

    /// Events strictly after now
    pub fn upcoming(&self) -> Vec<Arc<Event>> {
        let now = self.clock.now();
        self.events
            .read()
            .iter()
            .filter(|e| e.is_upcoming(now))
            .cloned()
            .collect()
    }

    /// Events at or before now
    pub fn past(&self) -> Vec<Arc<Event>> {
        let now = self.clock.now();
        self.events
            .read()
            .iter()
            .filter(|e| !e.is_upcoming(now))
            .cloned()
            .collect()
    }

    /// Append a new event with a freshly issued id and empty lists
    pub fn add(&self, new_event: NewEvent) -> Arc<Event> {
        let id = EventId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let event = Arc::new(new_event.into_event(id));

        self.events.write().push(Arc::clone(&event));
        info!("Created event {} ({})", event.id, event.title);
        event
    }

    /// Reserve a capacity slot for `student_id`
    pub fn register(
        &self,
        event_id: EventId,
        student_id: &UserId,
    ) -> Result<Arc<Event>, RegistryError> {
        let result = self.update(event_id, |event| {
            if event.is_full() {
                return Err(RegistryError::Full {
                    event_id,
                    capacity: event.capacity,
                });
            }
            if event.is_registered(student_id) {
                return Err(RegistryError::AlreadyRegistered {
                    event_id,
                    student_id: student_id.clone(),
                });
            }

            let mut updated = event.clone();
            updated.registered_students.push(student_id.clone());
            Ok(updated)
        });

        match &result {
            Ok(event) => info!(
                "Student {} registered for event {} ({}/{})",
                student_id,
                event_id,
                event.registered_count(),
                event.capacity
            ),
            Err(e) => warn!("Registration rejected: {}", e),
        }
        result
    }

    /// Confirm that a registered student attended
    pub fn mark_attendance(
        &self,
        event_id: EventId,
        student_id: &UserId,
    ) -> Result<Arc<Event>, RegistryError> {
        let result = self.update(event_id, |event| {
            if !event.is_registered(student_id) {
                return Err(RegistryError::NotRegistered {
                    event_id,
                    student_id: student_id.clone(),
                });
            }
            if event.has_attended(student_id) {
                return Err(RegistryError::AlreadyAttended {
                    event_id,
                    student_id: student_id.clone(),
                });
            }

            let mut updated = event.clone();
            updated.attendees.push(student_id.clone());
            Ok(updated)
        });

        match &result {
            Ok(_) => info!("Student {} attended event {}", student_id, event_id),
            Err(e) => warn!("Attendance rejected: {}", e),
        }
        result
    }

    /// Registered/attended flags of one student for one event
    pub fn participation(
        &self,
        event_id: EventId,
        student_id: &UserId,
    ) -> Result<Participation, RegistryError> {
        self.by_id(event_id)
            .map(|event| Participation::of(&event, student_id))
            .ok_or(RegistryError::NotFound { event_id })
    }

    /// Events the student is registered for, in insertion order
    pub fn events_for_student(&self, student_id: &UserId) -> Vec<Arc<Event>> {
        self.events
            .read()
            .iter()
            .filter(|e| e.is_registered(student_id))
            .cloned()
            .collect()
    }

    pub fn status(&self, event: &Event) -> EventStatus {
        event.status(self.clock.now())
    }

    pub fn summarize(&self, event: &Event) -> EventSummary {
        EventSummary::of(event, self.clock.now())
    }

    /// Aggregate registration and attendance figures
    pub fn stats(&self) -> RegistryStats {
        let now = self.clock.now();
        let events = self.events.read();

        let total_registrations: usize = events.iter().map(|e| e.registered_students.len()).sum();
        let total_attendance: usize = events.iter().map(|e| e.attendees.len()).sum();

        RegistryStats {
            total_events: events.len(),
            upcoming_events: events.iter().filter(|e| e.is_upcoming(now)).count(),
            total_registrations,
            total_attendance,
            attendance_rate: percent_of(total_attendance, total_registrations),
        }
    }

    /// Apply `change` to the event with `event_id` and store the result as a
    /// new snapshot. The lookup, checks and swap run under one write lock.
    fn update<F>(&self, event_id: EventId, change: F) -> Result<Arc<Event>, RegistryError>
    where
        F: FnOnce(&Event) -> Result<Event, RegistryError>,
    {
        let mut events = self.events.write();
        let slot = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or(RegistryError::NotFound { event_id })?;

        let updated = Arc::new(change(&**slot)?);
        *slot = Arc::clone(&updated);
        Ok(updated)
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.len())
            .field("next_id", &self.next_id.load(Ordering::SeqCst))
            .finish()
    }
}
