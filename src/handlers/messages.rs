use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::ContactMessage;
use crate::services::validation;
use crate::state::AppState;

use super::check_auth;

// POST /api/messages
#[derive(Deserialize)]
pub struct NewMessageRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewMessageRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let name = payload.name.as_deref().unwrap_or("").trim().to_string();
    let email = payload.email.as_deref().unwrap_or("").trim().to_string();
    let body = payload.message.as_deref().unwrap_or("").trim().to_string();

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }
    if !validation::email_shape_ok(&email) {
        errors.push("A valid email address is required".to_string());
    }
    if body.is_empty() {
        errors.push("Message is required".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::BadRequest(errors.join(". ")));
    }

    let message = ContactMessage {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email,
        phone: payload.phone.filter(|p| !p.trim().is_empty()),
        subject: payload.subject.filter(|s| !s.trim().is_empty()),
        body,
        is_read: false,
        created_at: Utc::now().naive_utc(),
    };

    {
        let db = state.db.lock().unwrap();
        queries::create_message(&db, &message)?;
    }

    tracing::info!(id = %message.id, "contact message received");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "ok": true, "id": message.id })),
    ))
}

// GET /api/admin/messages
#[derive(Deserialize)]
pub struct MessagesQuery {
    pub unread: Option<bool>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    subject: Option<String>,
    message: String,
    is_read: bool,
    created_at: String,
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let unread_only = query.unread.unwrap_or(false);
    let limit = query.limit.unwrap_or(50);

    let messages = {
        let db = state.db.lock().unwrap();
        queries::get_messages(&db, unread_only, limit)?
    };

    let response: Vec<MessageResponse> = messages
        .into_iter()
        .map(|m| MessageResponse {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            subject: m.subject,
            message: m.body,
            is_read: m.is_read,
            created_at: m.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(response))
}

// POST /api/admin/messages/:id/read
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::mark_message_read(&db, &id)?
    };

    if !updated {
        return Err(AppError::NotFound(format!("message {id}")));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

// DELETE /api/admin/messages/:id
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let deleted = {
        let db = state.db.lock().unwrap();
        queries::delete_message(&db, &id)?
    };

    if !deleted {
        return Err(AppError::NotFound(format!("message {id}")));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}
