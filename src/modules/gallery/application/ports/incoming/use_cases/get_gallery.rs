use async_trait::async_trait;

use super::GalleryError;
use crate::modules::gallery::domain::GalleryImage;

#[async_trait]
pub trait GetGalleryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<GalleryImage>, GalleryError>;
}
