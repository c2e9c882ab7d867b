use async_trait::async_trait;
use uuid::Uuid;

use super::GalleryError;

#[async_trait]
pub trait DeleteGalleryImageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), GalleryError>;
}
