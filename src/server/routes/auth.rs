//! Authentication endpoints
//!
//! Login, logout and the current session state.

use crate::auth::AuthState;
use crate::core::models::User;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, TrackerError};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::info;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/state", web::get().to(session_state)),
    );
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User login endpoint
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        return Err(TrackerError::validation("Email and password are required"));
    }

    info!("User login attempt: {}", email);
    let user: User = state.sessions.login(email, &request.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

/// User logout endpoint
pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.sessions.logout().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.sessions.state())))
}

/// Current authentication state
pub async fn session_state(state: web::Data<AppState>) -> Result<HttpResponse> {
    let snapshot: AuthState = state.sessions.state();
    Ok(HttpResponse::Ok().json(ApiResponse::success(snapshot)))
}
