//! Derived figures for dashboards

use crate::core::models::{Event, EventStatus, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Rounded percentage of `part` over `whole`, `0` when `whole` is zero
pub fn percent_of(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Totals across every event in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_registrations: usize,
    pub total_attendance: usize,
    /// Attendance as a percentage of registrations
    pub attendance_rate: u32,
}

/// A student's standing for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Participation {
    pub registered: bool,
    pub attended: bool,
}

impl Participation {
    pub fn of(event: &Event, student_id: &UserId) -> Self {
        Self {
            registered: event.is_registered(student_id),
            attended: event.has_attended(student_id),
        }
    }
}

/// Event plus its capacity figures at a point in time
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    #[serde(flatten)]
    pub event: Event,
    pub registered_count: usize,
    pub available_spots: u32,
    pub fill_percent: u32,
    pub status: EventStatus,
}

impl EventSummary {
    pub fn of(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            event: event.clone(),
            registered_count: event.registered_count(),
            available_spots: event.available_spots(),
            fill_percent: percent_of(event.registered_count(), event.capacity as usize),
            status: event.status(now),
        }
    }
}
