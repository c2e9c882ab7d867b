use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Public contact details. Not translated; every field starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub name: String,
    pub instagram_handle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
