use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use chambers::config::AppConfig;
use chambers::db;
use chambers::handlers;
use chambers::services::validation::BookingRules;
use chambers::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        rules: BookingRules::standard(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/admin", get(handlers::admin::admin_page))
        .route("/api/admin/status", get(handlers::admin::get_status))
        .route(
            "/api/appointments",
            post(handlers::appointments::create_appointment),
        )
        .route(
            "/api/appointments/options",
            get(handlers::appointments::booking_options),
        )
        .route(
            "/api/admin/appointments",
            get(handlers::appointments::list_appointments),
        )
        .route(
            "/api/admin/appointments/:id/confirm",
            post(handlers::appointments::confirm_appointment),
        )
        .route(
            "/api/admin/appointments/:id/cancel",
            post(handlers::appointments::cancel_appointment),
        )
        .route("/api/messages", post(handlers::messages::submit_message))
        .route("/api/admin/messages", get(handlers::messages::list_messages))
        .route(
            "/api/admin/messages/:id/read",
            post(handlers::messages::mark_read),
        )
        .route(
            "/api/admin/messages/:id",
            delete(handlers::messages::delete_message),
        )
        .route("/api/posts", get(handlers::posts::list_published))
        .route("/api/posts/:slug", get(handlers::posts::get_published))
        .route(
            "/api/admin/posts",
            get(handlers::posts::list_all).post(handlers::posts::create_post),
        )
        .route(
            "/api/admin/posts/:id",
            put(handlers::posts::update_post).delete(handlers::posts::delete_post),
        )
        .route(
            "/api/admin/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/admin/users/:id",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        .route(
            "/api/content/practice-areas",
            get(handlers::content::practice_areas),
        )
        .route("/api/content/team", get(handlers::content::team))
        .route("/api/content/firm", get(handlers::content::firm))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
