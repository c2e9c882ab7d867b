use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::translation::domain::BilingualText;

/// A client quote. The author's name is shown as written in both languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialItem {
    pub id: Uuid,
    pub name: String,
    pub comment: BilingualText,
    pub activity_package: Option<BilingualText>,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
