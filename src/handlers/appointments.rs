use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Appointment, AppointmentRequest, AppointmentStatus};
use crate::services::validation;
use crate::state::AppState;

use super::check_auth;

// POST /api/appointments
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    // A body that cannot be read as an appointment request gets one generic
    // client error; rejection detail stays out of the response.
    let Json(request) = payload.map_err(|_| AppError::InvalidAppointment)?;

    let today = Local::now().date_naive();
    validation::validate_request(&request, today, &state.rules)?;

    let appointment = build_appointment(&request);
    {
        let db = state.db.lock().unwrap();
        queries::create_appointment(&db, &appointment)?;
    }

    tracing::info!(
        id = %appointment.id,
        service = %appointment.service,
        date = %appointment.appointment_date,
        "appointment request received"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "ok": true, "id": appointment.id })),
    ))
}

// Fields already passed validation; the fallbacks here never fire for a
// request that reached this point.
fn build_appointment(request: &AppointmentRequest) -> Appointment {
    let now = Utc::now().naive_utc();
    let appointment_date = request
        .appointment_date
        .as_deref()
        .and_then(validation::parse_request_date)
        .unwrap_or_else(|| now.date());

    Appointment {
        id: uuid::Uuid::new_v4().to_string(),
        client_name: request.client_name.clone().unwrap_or_default(),
        client_email: request.client_email.clone().unwrap_or_default(),
        client_phone: request.client_phone.clone().unwrap_or_default(),
        service: request.service.clone().unwrap_or_default(),
        appointment_date,
        appointment_time: request.appointment_time.clone().unwrap_or_default(),
        message: request.message.clone().unwrap_or_default(),
        status: AppointmentStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

// GET /api/appointments/options
#[derive(Serialize)]
pub struct BookingOptions {
    services: Vec<String>,
    time_slots: Vec<String>,
}

pub async fn booking_options(State(state): State<Arc<AppState>>) -> Json<BookingOptions> {
    Json(BookingOptions {
        services: state.rules.services().to_vec(),
        time_slots: state.rules.time_slots().to_vec(),
    })
}

// GET /api/admin/appointments
#[derive(Deserialize)]
pub struct AppointmentsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    id: String,
    client_name: String,
    client_email: String,
    client_phone: String,
    service: String,
    appointment_date: String,
    appointment_time: String,
    message: String,
    status: String,
    created_at: String,
    updated_at: String,
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let limit = query.limit.unwrap_or(50);
    let status_filter = query.status.as_deref();

    let appointments = {
        let db = state.db.lock().unwrap();
        queries::get_appointments(&db, status_filter, limit)?
    };

    let response: Vec<AppointmentResponse> = appointments
        .into_iter()
        .map(|a| AppointmentResponse {
            id: a.id,
            client_name: a.client_name,
            client_email: a.client_email,
            client_phone: a.client_phone,
            service: a.service,
            appointment_date: a.appointment_date.format("%Y-%m-%d").to_string(),
            appointment_time: a.appointment_time,
            message: a.message,
            status: a.status.as_str().to_string(),
            created_at: a.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: a.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(response))
}

// POST /api/admin/appointments/:id/confirm
pub async fn confirm_appointment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    set_status(&state, &id, AppointmentStatus::Confirmed)
}

// POST /api/admin/appointments/:id/cancel
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    set_status(&state, &id, AppointmentStatus::Cancelled)
}

fn set_status(
    state: &Arc<AppState>,
    id: &str,
    status: AppointmentStatus,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = {
        let db = state.db.lock().unwrap();
        queries::update_appointment_status(&db, id, &status)?
    };

    if !updated {
        return Err(AppError::NotFound(format!("appointment {id}")));
    }

    tracing::info!(id = %id, status = %status.as_str(), "appointment status updated");
    Ok(Json(serde_json::json!({ "ok": true, "status": status.as_str() })))
}
