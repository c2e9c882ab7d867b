use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::gallery::domain::GalleryImage;
use crate::modules::media::domain::StoredAsset;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryRepositoryError {
    #[error("Image not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryImage {
    pub asset: StoredAsset,
    pub caption: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryChanges {
    pub caption: Option<String>,
    pub display_order: Option<i32>,
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Ordered by `display_order` ascending, newest first on ties.
    async fn list(&self) -> Result<Vec<GalleryImage>, GalleryRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, GalleryRepositoryError>;

    async fn create(&self, image: NewGalleryImage) -> Result<GalleryImage, GalleryRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: GalleryChanges,
    ) -> Result<GalleryImage, GalleryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), GalleryRepositoryError>;
}
