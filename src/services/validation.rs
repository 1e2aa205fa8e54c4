use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::models::AppointmentRequest;
use crate::services::content;

/// Consultation slots offered by the booking form, mornings and afternoons
/// around the midday court recess.
pub const CONSULTATION_SLOTS: [&str; 6] = [
    "09:00 AM",
    "10:00 AM",
    "11:00 AM",
    "02:00 PM",
    "03:00 PM",
    "04:00 PM",
];

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;
const MIN_PHONE_DIGITS: usize = 10;

/// Allow-lists the request checks consult. Built once at startup and carried
/// in app state so the offered services and slots can change without touching
/// the check logic.
#[derive(Debug, Clone)]
pub struct BookingRules {
    services: Vec<String>,
    time_slots: Vec<String>,
}

impl BookingRules {
    pub fn new(services: Vec<String>, time_slots: Vec<String>) -> Self {
        Self { services, time_slots }
    }

    /// The firm's standard offering: one bookable service per practice area
    /// and six weekday consultation slots.
    pub fn standard() -> Self {
        Self::new(
            content::practice_areas()
                .iter()
                .map(|area| area.name.to_string())
                .collect(),
            CONSULTATION_SLOTS.iter().map(|slot| slot.to_string()).collect(),
        )
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }
}

/// Why a request was turned away. Reasons keep the order the checks ran in.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    reasons: Vec<String>,
}

impl ValidationFailure {
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reasons.join(". "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Runs every field check against a submitted appointment request and
/// collects all failures in one pass, so the form can show the complete list
/// instead of one problem at a time. Pure with respect to the clock: `today`
/// comes from the caller.
pub fn validate_request(
    request: &AppointmentRequest,
    today: NaiveDate,
    rules: &BookingRules,
) -> Result<(), ValidationFailure> {
    let mut reasons = Vec::new();

    let name = request.client_name.as_deref().unwrap_or("");
    if name.trim().chars().count() < MIN_NAME_LEN {
        reasons.push("Client name must be at least 2 characters long".to_string());
    }

    let email = request.client_email.as_deref().unwrap_or("");
    if !email_shape_ok(email) {
        reasons.push("A valid email address is required".to_string());
    }

    let phone = request.client_phone.as_deref().unwrap_or("");
    if !phone_ok(phone) {
        reasons.push("A valid phone number with at least 10 digits is required".to_string());
    }

    let service = request.service.as_deref().unwrap_or("");
    if !rules.services.iter().any(|offered| offered == service) {
        reasons.push("Service must be one of our practice areas".to_string());
    }

    let date = request.appointment_date.as_deref().and_then(parse_request_date);
    match date {
        None => reasons.push("A valid appointment date is required".to_string()),
        Some(d) if d < today => {
            reasons.push("Appointment date cannot be in the past".to_string())
        }
        Some(_) => {}
    }

    let time = request.appointment_time.as_deref().unwrap_or("");
    if !rules.time_slots.iter().any(|slot| slot == time) {
        reasons.push("Appointment time must be one of the offered time slots".to_string());
    }

    // A date that never parsed has no weekday to inspect; the missing-date
    // reason above already covers it.
    if let Some(d) = date {
        if matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            reasons.push("Appointments are only available Monday through Friday".to_string());
        }
    }

    let message = request.message.as_deref().unwrap_or("");
    if message.trim().chars().count() < MIN_MESSAGE_LEN {
        reasons.push("Message must be at least 10 characters long".to_string());
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { reasons })
    }
}

/// Accepts the calendar-date shapes browsers and API clients actually send.
/// Datetime forms are truncated to their date.
pub fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// The classic `local@domain.tld` shape check: no whitespace, one "@", and a
/// dot inside the domain with at least one character on each side of it.
pub fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

fn phone_ok(phone: &str) -> bool {
    let charset_ok = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    charset_ok && digits >= MIN_PHONE_DIGITS
}
