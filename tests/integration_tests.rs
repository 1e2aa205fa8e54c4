use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::Router;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use tower::ServiceExt;

use chambers::config::AppConfig;
use chambers::db;
use chambers::handlers;
use chambers::services::validation::BookingRules;
use chambers::state::AppState;

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        database_url: ":memory:".to_string(),
        admin_token: "test-token".to_string(),
    }
}

fn test_state() -> Arc<AppState> {
    let config = test_config();
    let conn = db::init_db(":memory:").unwrap();
    Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config,
        rules: BookingRules::standard(),
    })
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
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
        .with_state(state)
}

fn admin_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .body(Body::empty())
        .unwrap()
}

fn admin_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_put(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn admin_delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", "Bearer test-token")
        .body(Body::empty())
        .unwrap()
}

fn public_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// A weekday at least a week out, so the date checks always see the future.
fn next_weekday() -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(7);
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    date
}

fn next_saturday() -> NaiveDate {
    let mut date = Local::now().date_naive() + Duration::days(1);
    while date.weekday() != Weekday::Sat {
        date += Duration::days(1);
    }
    date
}

fn appointment_body() -> serde_json::Value {
    serde_json::json!({
        "clientName": "Jordan Blake",
        "clientEmail": "jordan.blake@example.com",
        "clientPhone": "(703) 555-0142",
        "service": "Family Law",
        "appointmentDate": next_weekday().format("%Y-%m-%d").to_string(),
        "appointmentTime": "10:00 AM",
        "message": "I need advice about a custody agreement.",
    })
}

// ── Health Check ──

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

// ── Admin Auth ──

#[tokio::test]
async fn test_admin_requires_auth() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_wrong_token() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/status")
                .header("Authorization", "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_status_empty_database() {
    let state = test_state();
    let app = test_app(state);

    let res = app.oneshot(admin_get("/api/admin/status")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json = body_json(res).await;
    assert_eq!(json["pending_appointments"], 0);
    assert_eq!(json["unread_messages"], 0);
    assert_eq!(json["published_posts"], 0);
    assert_eq!(json["active_users"], 0);
}

// ── Appointment Requests ──

#[tokio::test]
async fn test_submit_valid_appointment() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post("/api/appointments", appointment_body().to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let json = body_json(res).await;
    assert_eq!(json["ok"], true);
    assert!(json["id"].is_string());

    // The request lands as a pending appointment
    let app = test_app(state);
    let res = app
        .oneshot(admin_get("/api/admin/appointments"))
        .await
        .unwrap();
    let json = body_json(res).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["client_name"], "Jordan Blake");
    assert_eq!(list[0]["service"], "Family Law");
    assert_eq!(list[0]["status"], "pending");
}

#[tokio::test]
async fn test_appointment_missing_phone_rejected() {
    let state = test_state();

    let mut body = appointment_body();
    body.as_object_mut().unwrap().remove("clientPhone");

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(
        json["error"],
        "A valid phone number with at least 10 digits is required"
    );

    // Nothing was stored
    let app = test_app(state);
    let res = app
        .oneshot(admin_get("/api/admin/appointments"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_appointment_reasons_accumulate_in_order() {
    let state = test_state();
    let app = test_app(state);

    let mut body = appointment_body();
    body["clientName"] = serde_json::json!("J");
    body["clientEmail"] = serde_json::json!("not-an-email");
    body["appointmentTime"] = serde_json::json!("noon");

    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(
        json["error"],
        "Client name must be at least 2 characters long. \
         A valid email address is required. \
         Appointment time must be one of the offered time slots"
    );
}

#[tokio::test]
async fn test_appointment_unknown_service_rejected() {
    let state = test_state();
    let app = test_app(state);

    let mut body = appointment_body();
    body["service"] = serde_json::json!("Maritime Law");

    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Service must be one of our practice areas");
}

#[tokio::test]
async fn test_appointment_past_date_rejected() {
    let state = test_state();
    let app = test_app(state);

    let mut body = appointment_body();
    // a Monday long gone
    body["appointmentDate"] = serde_json::json!("2020-01-06");

    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Appointment date cannot be in the past");
}

#[tokio::test]
async fn test_appointment_weekend_rejected() {
    let state = test_state();
    let app = test_app(state);

    let mut body = appointment_body();
    body["appointmentDate"] = serde_json::json!(next_saturday().format("%Y-%m-%d").to_string());

    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(
        json["error"],
        "Appointments are only available Monday through Friday"
    );
}

#[tokio::test]
async fn test_appointment_malformed_body_gets_generic_error() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(public_post(
            "/api/appointments",
            "{not valid json".to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Invalid appointment data");
}

#[tokio::test]
async fn test_appointment_wrong_field_type_gets_generic_error() {
    let state = test_state();
    let app = test_app(state);

    let mut body = appointment_body();
    body["clientName"] = serde_json::json!(42);

    let res = app
        .oneshot(public_post("/api/appointments", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Invalid appointment data");
}

#[tokio::test]
async fn test_booking_options_public() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/appointments/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json = body_json(res).await;
    let services = json["services"].as_array().unwrap();
    let slots = json["time_slots"].as_array().unwrap();
    assert_eq!(services.len(), 6);
    assert!(services.contains(&serde_json::json!("Family Law")));
    assert_eq!(slots.len(), 6);
    assert!(slots.contains(&serde_json::json!("09:00 AM")));
}

// ── Appointment Admin Flow ──

#[tokio::test]
async fn test_confirm_and_cancel_appointment() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post("/api/appointments", appointment_body().to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = body_json(res).await["id"].as_str().unwrap().to_string();

    // Confirm it
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            &format!("/api/admin/appointments/{id}/confirm"),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["status"], "confirmed");

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_get("/api/admin/appointments?status=confirmed"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Cancel it again
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            &format!("/api/admin/appointments/{id}/cancel"),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state);
    let res = app
        .oneshot(admin_get("/api/admin/appointments?status=cancelled"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["status"], "cancelled");
}

#[tokio::test]
async fn test_confirm_unknown_appointment() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(admin_post("/api/admin/appointments/no-such-id/confirm", ""))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_appointment_list_requires_auth() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/appointments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

// ── Contact Messages ──

#[tokio::test]
async fn test_message_lifecycle() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post(
            "/api/messages",
            r#"{"name":"Ana Reyes","email":"ana@example.com","subject":"Estate question","message":"Could someone call me about updating a will?"}"#
                .to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = body_json(res).await["id"].as_str().unwrap().to_string();

    // Shows up unread
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_get("/api/admin/messages?unread=true"))
        .await
        .unwrap();
    let json = body_json(res).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Ana Reyes");
    assert_eq!(list[0]["is_read"], false);

    // Mark read
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(&format!("/api/admin/messages/{id}/read"), ""))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_get("/api/admin/messages?unread=true"))
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // Delete
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_delete(&format!("/api/admin/messages/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state);
    let res = app.oneshot(admin_get("/api/admin/messages")).await.unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_message_requires_name_and_email() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(public_post(
            "/api/messages",
            r#"{"message":"No name or email on this one."}"#.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let json = body_json(res).await;
    assert_eq!(json["error"], "Name is required. A valid email address is required");
}

#[tokio::test]
async fn test_delete_unknown_message() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(admin_delete("/api/admin/messages/no-such-id"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// ── Posts ──

#[tokio::test]
async fn test_post_lifecycle() {
    let state = test_state();

    // Create a draft; slug derived from the title
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            "/api/admin/posts",
            r#"{"title":"Understanding Trust Basics","body":"A trust separates legal and beneficial ownership.","summary":"Trusts 101"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let json = body_json(res).await;
    assert_eq!(json["slug"], "understanding-trust-basics");
    assert_eq!(json["published"], false);
    let id = json["id"].as_str().unwrap().to_string();

    // Drafts stay off the public site
    let app = test_app(state.clone());
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let app = test_app(state.clone());
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/posts/understanding-trust-basics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Publish
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_put(
            &format!("/api/admin/posts/{id}"),
            r#"{"published":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state.clone());
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/posts/understanding-trust-basics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["title"], "Understanding Trust Basics");

    // Delete
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_delete(&format!("/api/admin/posts/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state);
    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/posts/understanding-trust-basics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_duplicate_slug_rejected() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            "/api/admin/posts",
            r#"{"title":"Hiring Your First Employee","body":"Paperwork before the first day."}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let app = test_app(state);
    let res = app
        .oneshot(admin_post(
            "/api/admin/posts",
            r#"{"title":"Something Else","slug":"hiring-your-first-employee","body":"Different text."}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_requires_title_and_body() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post("/api/admin/posts", r#"{"body":"No title."}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let app = test_app(state);
    let res = app
        .oneshot(admin_post("/api/admin/posts", r#"{"title":"No Body"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_post_listing_includes_drafts() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            "/api/admin/posts",
            r#"{"title":"Draft Note","body":"Not yet public."}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let app = test_app(state);
    let res = app.oneshot(admin_get("/api/admin/posts")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ── Staff Users ──

#[tokio::test]
async fn test_user_crud() {
    let state = test_state();

    // Create with defaults: editor role, active
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            "/api/admin/users",
            r#"{"username":"dokafor","display_name":"Daniel Okafor","email":"daniel@hartwellcrane.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let json = body_json(res).await;
    assert_eq!(json["role"], "editor");
    assert_eq!(json["active"], true);
    let id = json["id"].as_str().unwrap().to_string();

    // Promote to admin and deactivate
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_put(
            &format!("/api/admin/users/{id}"),
            r#"{"role":"admin","active":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let json = body_json(res).await;
    assert_eq!(json["role"], "admin");
    assert_eq!(json["active"], false);

    // Listed
    let app = test_app(state.clone());
    let res = app.oneshot(admin_get("/api/admin/users")).await.unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["username"], "dokafor");

    // Delete
    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_delete(&format!("/api/admin/users/{id}")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let app = test_app(state);
    let res = app.oneshot(admin_get("/api/admin/users")).await.unwrap();
    let json = body_json(res).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_user_duplicate_username_rejected() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(admin_post(
            "/api/admin/users",
            r#"{"username":"praman"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let app = test_app(state);
    let res = app
        .oneshot(admin_post(
            "/api/admin/users",
            r#"{"username":"praman","display_name":"Someone Else"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_unknown_role_rejected() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(admin_post(
            "/api/admin/users",
            r#"{"username":"ghost","role":"superuser"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

// ── Dashboard Counts ──

#[tokio::test]
async fn test_status_reflects_activity() {
    let state = test_state();

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post("/api/appointments", appointment_body().to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let app = test_app(state.clone());
    let res = app
        .oneshot(public_post(
            "/api/messages",
            r#"{"name":"Sam","email":"sam@example.com","message":"Checking in about an old matter."}"#
                .to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let app = test_app(state);
    let res = app.oneshot(admin_get("/api/admin/status")).await.unwrap();
    let json = body_json(res).await;
    assert_eq!(json["pending_appointments"], 1);
    assert_eq!(json["unread_messages"], 1);
}

// ── Site Content ──

#[tokio::test]
async fn test_practice_areas_listing() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/content/practice-areas")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json = body_json(res).await;
    let areas = json.as_array().unwrap();
    assert_eq!(areas.len(), 6);
    let names: Vec<&str> = areas.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Corporate Law"));
    assert!(names.contains(&"Tax Law"));
}

#[tokio::test]
async fn test_firm_profile() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/api/content/firm")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json = body_json(res).await;
    assert_eq!(json["name"], "Hartwell & Crane LLP");
    assert!(json["values"].as_array().unwrap().len() >= 3);
}

// ── Admin Page ──

#[tokio::test]
async fn test_admin_page_serves_html() {
    let state = test_state();
    let app = test_app(state);

    let res = app
        .oneshot(
            Request::builder()
                .uri("/admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("<!DOCTYPE html>"));
    assert!(text.contains("HARTWELL"));
}
