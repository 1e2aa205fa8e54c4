use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A message left through the contact form, kept until an admin deletes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub body: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}
