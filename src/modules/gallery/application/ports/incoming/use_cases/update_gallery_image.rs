use async_trait::async_trait;
use uuid::Uuid;

use super::GalleryError;
use crate::modules::gallery::domain::GalleryImage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateGalleryImageCommand {
    pub caption: Option<String>,
    pub order: Option<i32>,
}

impl UpdateGalleryImageCommand {
    pub fn is_empty(&self) -> bool {
        self.caption.is_none() && self.order.is_none()
    }
}

#[async_trait]
pub trait UpdateGalleryImageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateGalleryImageCommand,
    ) -> Result<GalleryImage, GalleryError>;
}
