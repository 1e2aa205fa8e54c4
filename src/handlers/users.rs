use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::user::{valid_role, StaffUser, ROLE_EDITOR};
use crate::state::AppState;

use super::check_auth;

#[derive(Serialize)]
pub struct UserResponse {
    id: String,
    username: String,
    display_name: String,
    email: String,
    role: String,
    active: bool,
    created_at: String,
}

fn to_response(user: StaffUser) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
        active: user.active,
        created_at: user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[derive(Deserialize)]
pub struct UsersQuery {
    pub limit: Option<i64>,
}

// GET /api/admin/users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<UsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let users = {
        let db = state.db.lock().unwrap();
        queries::get_users(&db, limit)?
    };
    Ok(Json(users.into_iter().map(to_response).collect()))
}

// POST /api/admin/users
#[derive(Deserialize)]
pub struct NewUserRequest {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<NewUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let username = payload.username.as_deref().unwrap_or("").trim().to_lowercase();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    let role = payload
        .role
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| ROLE_EDITOR.to_string());
    if !valid_role(&role) {
        return Err(AppError::BadRequest(format!("Unknown role '{role}'")));
    }

    {
        let db = state.db.lock().unwrap();
        if queries::get_user_by_username(&db, &username)?.is_some() {
            return Err(AppError::BadRequest(format!("Username '{username}' is taken")));
        }
    }

    let user = StaffUser {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.clone(),
        display_name: payload
            .display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| username.clone()),
        email: payload.email.unwrap_or_default(),
        role,
        active: true,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::create_user(&db, &user)?;
    }

    tracing::info!(id = %user.id, username = %user.username, "staff user created");
    Ok((StatusCode::CREATED, Json(to_response(user))))
}

// PUT /api/admin/users/:id
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let mut user = {
        let db = state.db.lock().unwrap();
        queries::get_user_by_id(&db, &id)?
    }
    .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    if let Some(display_name) = payload.display_name {
        if !display_name.trim().is_empty() {
            user.display_name = display_name;
        }
    }
    if let Some(email) = payload.email {
        user.email = email;
    }
    if let Some(role) = payload.role {
        if !valid_role(&role) {
            return Err(AppError::BadRequest(format!("Unknown role '{role}'")));
        }
        user.role = role;
    }
    if let Some(active) = payload.active {
        user.active = active;
    }

    let updated = {
        let db = state.db.lock().unwrap();
        queries::update_user(&db, &user)?
    };

    if !updated {
        return Err(AppError::NotFound(format!("user {id}")));
    }
    Ok(Json(to_response(user)))
}

// DELETE /api/admin/users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let deleted = {
        let db = state.db.lock().unwrap();
        queries::delete_user(&db, &id)?
    };

    if !deleted {
        return Err(AppError::NotFound(format!("user {id}")));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}
