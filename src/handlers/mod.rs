pub mod admin;
pub mod appointments;
pub mod content;
pub mod health;
pub mod messages;
pub mod posts;
pub mod users;

use axum::http::HeaderMap;

use crate::errors::AppError;

/// Admin endpoints gate on the bearer token from config.
pub(crate) fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
