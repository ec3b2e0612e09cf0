//! Tests for server module
//!
//! These drive the full route table through `actix_web::test`.

#[cfg(test)]
mod tests {
    use crate::auth::{MemorySessionStorage, SessionStore};
    use crate::config::{AuthConfig, Config};
    use crate::core::clock::MockClock;
    use crate::core::directory::UserDirectory;
    use crate::core::events::{EventRegistry, mock_events};
    use crate::core::models::{EventId, UserId};
    use crate::server::server::HttpServer;
    use crate::server::state::AppState;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn app_state() -> AppState {
        let directory = Arc::new(UserDirectory::with_mock_users());
        let clock = MockClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
        let events = EventRegistry::with_events(mock_events(), Arc::new(clock));
        let sessions = SessionStore::new(
            Arc::clone(&directory),
            Arc::new(MemorySessionStorage::new()),
            AuthConfig {
                login_delay_ms: 0,
                ..AuthConfig::default()
            },
        );
        AppState::new(Config::default(), directory, events, sessions)
    }

    macro_rules! init {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(HttpServer::configure),
            )
            .await
        };
    }

    macro_rules! login {
        ($app:expr, $email:expr) => {{
            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "email": $email, "password": "password" }))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }};
    }

    #[actix_web::test]
    async fn test_health() {
        let app = init!(app_state());
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["events"], 3);
        assert_eq!(body["data"]["authenticated"], false);
        assert_eq!(body["data"]["version"], crate::VERSION);
        assert_eq!(body["data"]["git_hash"], crate::build_info().git_hash);
    }

    #[actix_web::test]
    async fn test_login_and_state() {
        let app = init!(app_state());

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": "jane@alumni.edu", "password": "password" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "alumni");
        assert_eq!(body["data"]["company"], "Google");

        let req = test::TestRequest::get().uri("/auth/state").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_authenticated"], true);
        assert_eq!(body["data"]["is_loading"], false);
    }

    #[actix_web::test]
    async fn test_wrong_password_is_unauthorized() {
        let state = app_state();
        let app = init!(state.clone());

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": "john@student.edu", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "AUTH_ERROR");
        assert_eq!(
            state.sessions.state().error.as_deref(),
            Some("Invalid email or password")
        );
    }

    #[actix_web::test]
    async fn test_events_require_sign_in() {
        let app = init!(app_state());
        let req = test::TestRequest::get().uri("/events").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_list_events_by_scope() {
        let app = init!(app_state());
        login!(app, "john@student.edu");

        let req = test::TestRequest::get()
            .uri("/events?scope=upcoming")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["count"], 2);
        assert_eq!(body["data"][0]["title"], "Career Development Workshop");

        let req = test::TestRequest::get().uri("/events?scope=past").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["count"], 1);

        let req = test::TestRequest::get().uri("/events/2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["registered_count"], 3);
        assert_eq!(body["data"]["available_spots"], 47);
        assert_eq!(body["data"]["status"], "open");
    }

    #[actix_web::test]
    async fn test_student_registers_self() {
        let state = app_state();
        let app = init!(state.clone());
        login!(app, "sarah@student.edu");

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_REGISTERED");

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .set_json(json!({ "student_id": "9" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_register_rejects_malformed_body() {
        let state = app_state();
        let app = init!(state.clone());
        login!(app, "sarah@student.edu");

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .set_json(json!({ "student_id": 9 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"student_id\":")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let event = state.events.by_id(EventId(2)).unwrap();
        assert!(!event.is_registered(&UserId::from("4")));
        assert_eq!(event.registered_count(), 3);
    }

    #[actix_web::test]
    async fn test_admin_register_with_malformed_body() {
        let app = init!(app_state());
        login!(app, "admin@university.edu");

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .set_json(json!({ "student_id": ["4"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["error"]["message"]
                .as_str()
                .is_some_and(|m| m.contains("Invalid request body"))
        );
    }

    #[actix_web::test]
    async fn test_student_lists_own_events() {
        let app = init!(app_state());
        login!(app, "david@student.edu");

        let req = test::TestRequest::get().uri("/events?scope=mine").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["scope"], "mine");
        assert_eq!(body["meta"]["count"], 1);
        assert_eq!(body["data"][0]["id"], 1);

        let req = test::TestRequest::get().uri("/events/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["meta"]["participation"]["registered"], true);
        assert_eq!(body["meta"]["participation"]["attended"], false);

        login!(app, "admin@university.edu");
        let req = test::TestRequest::get().uri("/events?scope=mine").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/events/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.get("meta").is_none());
    }

    #[actix_web::test]
    async fn test_register_unknown_event() {
        let app = init!(app_state());
        login!(app, "john@student.edu");

        let req = test::TestRequest::post()
            .uri("/events/42/register")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_admin_flow() {
        let state = app_state();
        let app = init!(state.clone());
        login!(app, "admin@university.edu");

        let req = test::TestRequest::post()
            .uri("/events")
            .set_json(json!({
                "title": "Hackathon",
                "description": "24 hours of building",
                "date": "2025-09-01T09:00:00Z",
                "location": "Lab 3",
                "points_awarded": 60,
                "capacity": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 4);
        assert_eq!(body["data"]["created_by"], "3");

        // Attendance before registration is rejected
        let req = test::TestRequest::post()
            .uri("/events/4/attendance")
            .set_json(json!({ "student_id": "5" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::post()
            .uri("/events/4/register")
            .set_json(json!({ "student_id": "5" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/events/4/register")
            .set_json(json!({ "student_id": "9" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EVENT_FULL");

        let req = test::TestRequest::post()
            .uri("/events/4/attendance")
            .set_json(json!({ "student_id": "5" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/events/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["total_events"], 4);
        assert_eq!(body["data"]["total_registrations"], 10);
        assert_eq!(body["data"]["total_attendance"], 7);
    }

    #[actix_web::test]
    async fn test_admin_register_requires_student() {
        let app = init!(app_state());
        login!(app, "admin@university.edu");

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .set_json(json!({ "student_id": "2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/events/2/register")
            .set_json(json!({ "student_id": "404" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_event_rejects_bad_input() {
        let app = init!(app_state());
        login!(app, "admin@university.edu");

        let req = test::TestRequest::post()
            .uri("/events")
            .set_json(json!({
                "title": "  ",
                "date": "2025-09-01T09:00:00Z",
                "location": "Lab 3",
                "capacity": 10
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_student_cannot_create_events() {
        let app = init!(app_state());
        login!(app, "john@student.edu");

        let req = test::TestRequest::post()
            .uri("/events")
            .set_json(json!({
                "title": "Party",
                "date": "2025-09-01T21:00:00Z",
                "location": "Dorm",
                "capacity": 10
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get().uri("/events/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_dashboard_follows_role() {
        let app = init!(app_state());

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        login!(app, "john@student.edu");
        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "student");
        assert_eq!(body["data"]["past_events"][0]["attended"], true);

        login!(app, "admin@university.edu");
        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "admin");
        assert_eq!(body["data"]["stats"]["attendance_rate"], 67);
    }

    #[actix_web::test]
    async fn test_logout_ends_session() {
        let state = app_state();
        let app = init!(state.clone());
        login!(app, "john@student.edu");

        let req = test::TestRequest::post().uri("/auth/logout").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_authenticated"], false);
        assert!(state.sessions.current_user().is_none());
    }

    #[actix_web::test]
    async fn test_leaderboard_limit() {
        let app = init!(app_state());

        let req = test::TestRequest::get()
            .uri("/leaderboard?limit=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["data"][0]["name"], "Emily Johnson");

        let req = test::TestRequest::get()
            .uri("/leaderboard?limit=0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
