use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::translation::domain::BilingualText;

/// A timeline milestone. `age` is free text such as "18" or "Early 20s".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JourneyItem {
    pub id: Uuid,
    pub age: String,
    pub title: BilingualText,
    pub body: BilingualText,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
