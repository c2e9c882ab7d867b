use async_trait::async_trait;

use crate::modules::about::domain::AboutSection;
use crate::modules::media::domain::StoredAsset;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    async fn find(&self) -> Result<Option<AboutSection>, AboutRepositoryError>;

    /// Creates the section with `content` unless another request got there
    /// first, then returns whichever row is stored.
    async fn insert_if_absent(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError>;

    /// Upsert: writes `content` whether or not the section exists yet.
    async fn save_content(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError>;

    /// `None` clears both the URL and the deletion handle.
    async fn set_profile_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<AboutSection, AboutRepositoryError>;
}
