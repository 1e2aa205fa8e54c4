use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::state::AppState;

use super::check_auth;

static ADMIN_HTML: &str = include_str!("../web/admin.html");

// GET /admin
pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}

// GET /api/admin/status
#[derive(Serialize)]
pub struct StatusResponse {
    pending_appointments: i64,
    unread_messages: i64,
    published_posts: i64,
    active_users: i64,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let stats = {
        let db = state.db.lock().unwrap();
        queries::get_dashboard_stats(&db)?
    };

    Ok(Json(StatusResponse {
        pending_appointments: stats.pending_appointments,
        unread_messages: stats.unread_messages,
        published_posts: stats.published_posts,
        active_users: stats.active_users,
    }))
}
