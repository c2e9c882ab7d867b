use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::translation::domain::BilingualText;

pub fn default_title() -> BilingualText {
    BilingualText::new("Welcome to My Portfolio", "مرحبا بكم في محفظتي")
}

pub fn default_subtitle() -> BilingualText {
    BilingualText::new("Creative Professional", "محترف مبدع")
}

/// Landing banner: headline, tagline and an optional background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: BilingualText,
    pub subtitle: BilingualText,
    pub background_image_url: Option<String>,
    #[serde(skip)]
    pub background_image_public_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
