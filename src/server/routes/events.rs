//! Event endpoints
//!
//! Listing and lookup are open to any signed-in user. Creating events,
//! marking attendance and reading statistics require the admin role.
//! Students register themselves; admins may register a student by id.
//! Students can also list the events they registered for.

use crate::core::events::EventSummary;
use crate::core::models::{Event, EventId, NewEvent, User, UserId};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, TrackerError};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Configure event routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::get().to(list_events))
            .route("", web::post().to(create_event))
            .route("/stats", web::get().to(event_stats))
            .route("/{id}", web::get().to(get_event))
            .route("/{id}/register", web::post().to(register))
            .route("/{id}/attendance", web::post().to(mark_attendance)),
    );
}

/// Which events to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventScope {
    #[default]
    All,
    Upcoming,
    Past,
    /// Events the signed-in student registered for
    Mine,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    #[serde(default)]
    pub scope: EventScope,
}

/// New event submitted by an admin
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub points_awarded: u32,
    pub capacity: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateEventRequest {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TrackerError::validation("Event title is required"));
        }
        if self.location.trim().is_empty() {
            return Err(TrackerError::validation("Event location is required"));
        }
        if self.capacity == 0 {
            return Err(TrackerError::validation("Event capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Student targeted by a registration or attendance request
#[derive(Debug, Default, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub student_id: Option<UserId>,
}

impl StudentRequest {
    /// Parse an optional JSON body; an empty body means no student was named
    fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| TrackerError::validation(format!("Invalid request body: {}", e)))
    }
}

fn owned(events: Vec<Arc<Event>>) -> Vec<Event> {
    events.iter().map(|e| Event::clone(e)).collect()
}

/// List events
pub async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<EventQuery>,
) -> Result<HttpResponse> {
    let user = state.current_user()?;

    let scope = query.scope;
    let events = match scope {
        EventScope::All => state.events.all(),
        EventScope::Upcoming => state.events.upcoming(),
        EventScope::Past => state.events.past(),
        EventScope::Mine => match &user {
            User::Student(student) => state.events.events_for_student(&student.profile.id),
            _ => {
                return Err(TrackerError::validation(
                    "Only students have event registrations",
                ));
            }
        },
    };
    debug!("Listing {} events ({:?})", events.len(), scope);

    let meta = serde_json::json!({ "count": events.len(), "scope": scope });
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(owned(events), meta)))
}

/// Single event with capacity figures
///
/// A student also gets their own registered/attended flags in `meta`.
pub async fn get_event(state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse> {
    let user = state.current_user()?;

    let id = EventId(path.into_inner());
    let event = state
        .events
        .by_id(id)
        .ok_or_else(|| TrackerError::not_found(format!("Event {} not found", id)))?;

    let summary: EventSummary = state.events.summarize(&event);
    let response = match &user {
        User::Student(student) => {
            let participation = state.events.participation(id, &student.profile.id)?;
            ApiResponse::success_with_meta(
                summary,
                serde_json::json!({ "participation": participation }),
            )
        }
        _ => ApiResponse::success(summary),
    };
    Ok(HttpResponse::Ok().json(response))
}

/// Create an event
pub async fn create_event(
    state: web::Data<AppState>,
    request: web::Json<CreateEventRequest>,
) -> Result<HttpResponse> {
    let admin = state.require_admin()?;
    let request = request.into_inner();
    request.validate()?;

    let event = state.events.add(NewEvent {
        title: request.title.trim().to_string(),
        description: request.description,
        date: request.date,
        location: request.location.trim().to_string(),
        points_awarded: request.points_awarded,
        capacity: request.capacity,
        created_by: admin.profile.id,
        image_url: request.image_url,
    });

    Ok(HttpResponse::Created().json(ApiResponse::success(Event::clone(&event))))
}

/// Registry-wide statistics
pub async fn event_stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.require_admin()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.events.stats())))
}

/// Register for an event
///
/// The body is optional. When present it must be a valid [`StudentRequest`].
pub async fn register(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let user = state.current_user()?;
    let requested = StudentRequest::from_body(&body)?.student_id;

    let student_id = match &user {
        User::Student(student) => match requested {
            Some(id) if id != student.profile.id => {
                return Err(TrackerError::authorization(
                    "Students can only register themselves",
                ));
            }
            _ => student.profile.id.clone(),
        },
        User::Admin(_) => {
            let id = requested.ok_or_else(|| {
                TrackerError::validation("student_id is required when registering on behalf of a student")
            })?;
            ensure_student(&state, &id)?;
            id
        }
        User::Alumni(_) => {
            return Err(TrackerError::authorization(
                "Only students can be registered for events",
            ));
        }
    };

    let event = state
        .events
        .register(EventId(path.into_inner()), &student_id)?;
    info!("{} registered {} for event {}", user.email(), student_id, event.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(Event::clone(&event))))
}

/// Mark a registered student as having attended
pub async fn mark_attendance(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    request: web::Json<StudentRequest>,
) -> Result<HttpResponse> {
    state.require_admin()?;
    let student_id = request
        .into_inner()
        .student_id
        .ok_or_else(|| TrackerError::validation("student_id is required"))?;

    let event = state
        .events
        .mark_attendance(EventId(path.into_inner()), &student_id)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(Event::clone(&event))))
}

fn ensure_student(state: &AppState, id: &UserId) -> Result<()> {
    match state.directory.find_by_id(id) {
        Some(User::Student(_)) => Ok(()),
        Some(other) => Err(TrackerError::validation(format!(
            "User {} is not a student ({})",
            id,
            other.role()
        ))),
        None => Err(TrackerError::not_found(format!("Student {} not found", id))),
    }
}
