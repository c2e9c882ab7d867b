use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::translation::domain::BilingualText;

/// One entry of the experience list. `date` is free text and always null
/// while the experience is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: Uuid,
    pub name: BilingualText,
    pub date: Option<String>,
    pub in_progress: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
