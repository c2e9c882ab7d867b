use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::translation::domain::BilingualText;

/// English seed text; the Arabic side is produced by the translator.
pub const DEFAULT_ABOUT_CONTENT: &str = "Welcome to our portfolio!";

/// The single "about me" section of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub content: BilingualText,
    pub profile_image_url: Option<String>,
    #[serde(skip)]
    pub profile_image_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
