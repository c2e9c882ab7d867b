use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An account allowed to edit site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: Uuid,
    /// Always stored lowercase.
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
