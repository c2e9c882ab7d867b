use async_trait::async_trait;

use super::GalleryError;
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::media::domain::ImageUpload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadGalleryImageCommand {
    pub image: ImageUpload,
    pub caption: String,
    pub order: i32,
}

#[async_trait]
pub trait UploadGalleryImageUseCase: Send + Sync {
    async fn execute(&self, command: UploadGalleryImageCommand)
        -> Result<GalleryImage, GalleryError>;
}
