use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::post::{slugify, Post};
use crate::state::AppState;

use super::check_auth;

#[derive(Serialize)]
pub struct PostResponse {
    id: String,
    slug: String,
    title: String,
    summary: Option<String>,
    body: String,
    author: String,
    published: bool,
    created_at: String,
    updated_at: String,
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        slug: post.slug,
        title: post.title,
        summary: post.summary,
        body: post.body,
        author: post.author,
        published: post.published,
        created_at: post.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        updated_at: post.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[derive(Deserialize)]
pub struct PostsQuery {
    pub limit: Option<i64>,
}

// GET /api/posts
pub async fn list_published(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let limit = query.limit.unwrap_or(50);
    let posts = {
        let db = state.db.lock().unwrap();
        queries::get_posts(&db, true, limit)?
    };
    Ok(Json(posts.into_iter().map(to_response).collect()))
}

// GET /api/posts/:slug
pub async fn get_published(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<PostResponse>, AppError> {
    let post = {
        let db = state.db.lock().unwrap();
        queries::get_post_by_slug(&db, &slug)?
    };

    match post {
        Some(post) if post.published => Ok(Json(to_response(post))),
        _ => Err(AppError::NotFound(format!("post {slug}"))),
    }
}

// GET /api/admin/posts
pub async fn list_all(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<PostsQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let posts = {
        let db = state.db.lock().unwrap();
        queries::get_posts(&db, false, limit)?
    };
    Ok(Json(posts.into_iter().map(to_response).collect()))
}

// POST /api/admin/posts
#[derive(Deserialize)]
pub struct NewPostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<NewPostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let title = payload.title.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    let body = payload.body.as_deref().unwrap_or("").trim().to_string();
    if body.is_empty() {
        return Err(AppError::BadRequest("Body is required".to_string()));
    }

    let slug = match payload.slug.as_deref().map(str::trim) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => slugify(&title),
    };
    if slug.is_empty() {
        return Err(AppError::BadRequest("Slug could not be derived from title".to_string()));
    }

    {
        let db = state.db.lock().unwrap();
        if queries::get_post_by_slug(&db, &slug)?.is_some() {
            return Err(AppError::BadRequest(format!("A post with slug '{slug}' already exists")));
        }
    }

    let now = Utc::now().naive_utc();
    let post = Post {
        id: uuid::Uuid::new_v4().to_string(),
        slug,
        title,
        summary: payload.summary.filter(|s| !s.trim().is_empty()),
        body,
        author: payload
            .author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| "Hartwell & Crane".to_string()),
        published: payload.published.unwrap_or(false),
        created_at: now,
        updated_at: now,
    };

    {
        let db = state.db.lock().unwrap();
        queries::create_post(&db, &post)?;
    }

    tracing::info!(id = %post.id, slug = %post.slug, "post created");
    Ok((StatusCode::CREATED, Json(to_response(post))))
}

// PUT /api/admin/posts/:id
#[derive(Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

pub async fn update_post(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let mut post = {
        let db = state.db.lock().unwrap();
        queries::get_post_by_id(&db, &id)?
    }
    .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    if let Some(title) = payload.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title cannot be empty".to_string()));
        }
        post.title = title;
    }
    if let Some(slug) = payload.slug {
        let slug = slug.trim().to_string();
        if slug.is_empty() {
            return Err(AppError::BadRequest("Slug cannot be empty".to_string()));
        }
        {
            let db = state.db.lock().unwrap();
            if let Some(existing) = queries::get_post_by_slug(&db, &slug)? {
                if existing.id != post.id {
                    return Err(AppError::BadRequest(format!(
                        "A post with slug '{slug}' already exists"
                    )));
                }
            }
        }
        post.slug = slug;
    }
    if let Some(summary) = payload.summary {
        post.summary = if summary.trim().is_empty() { None } else { Some(summary) };
    }
    if let Some(body) = payload.body {
        let body = body.trim().to_string();
        if body.is_empty() {
            return Err(AppError::BadRequest("Body cannot be empty".to_string()));
        }
        post.body = body;
    }
    if let Some(author) = payload.author {
        if !author.trim().is_empty() {
            post.author = author;
        }
    }
    if let Some(published) = payload.published {
        post.published = published;
    }
    post.updated_at = Utc::now().naive_utc();

    let updated = {
        let db = state.db.lock().unwrap();
        queries::update_post(&db, &post)?
    };

    if !updated {
        return Err(AppError::NotFound(format!("post {id}")));
    }
    Ok(Json(to_response(post)))
}

// DELETE /api/admin/posts/:id
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let deleted = {
        let db = state.db.lock().unwrap();
        queries::delete_post(&db, &id)?
    };

    if !deleted {
        return Err(AppError::NotFound(format!("post {id}")));
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}
