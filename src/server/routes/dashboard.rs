//! Dashboard and leaderboard endpoints

use crate::core::dashboard::{Dashboard, LEADERBOARD_LIMIT};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, TrackerError};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

/// Longest leaderboard a client may request
const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Configure dashboard routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard))
        .route("/leaderboard", web::get().to(leaderboard));
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

/// Dashboard of the signed-in user
pub async fn dashboard(state: web::Data<AppState>) -> Result<HttpResponse> {
    let user = state.current_user()?;
    let dashboard = Dashboard::for_user(&user, &state.events, &state.directory);
    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard)))
}

/// Students ranked by points
pub async fn leaderboard(
    state: web::Data<AppState>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(LEADERBOARD_LIMIT);
    if limit == 0 || limit > MAX_LEADERBOARD_LIMIT {
        return Err(TrackerError::validation(format!(
            "limit must be between 1 and {}",
            MAX_LEADERBOARD_LIMIT
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(state.directory.leaderboard(limit))))
}
