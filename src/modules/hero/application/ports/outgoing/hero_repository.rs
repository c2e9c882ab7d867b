use async_trait::async_trait;

use crate::modules::hero::domain::HeroSection;
use crate::modules::media::domain::StoredAsset;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn find(&self) -> Result<Option<HeroSection>, HeroRepositoryError>;

    async fn insert_if_absent(
        &self,
        title: BilingualText,
        subtitle: BilingualText,
    ) -> Result<HeroSection, HeroRepositoryError>;

    /// Writes only the fields that are `Some`. The section must exist.
    async fn update_text(
        &self,
        title: Option<BilingualText>,
        subtitle: Option<BilingualText>,
    ) -> Result<HeroSection, HeroRepositoryError>;

    async fn set_background_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<HeroSection, HeroRepositoryError>;
}
