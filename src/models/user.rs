use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// A staff account for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

pub fn valid_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}
