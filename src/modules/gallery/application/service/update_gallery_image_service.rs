use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::normalize_caption;
use crate::modules::gallery::application::ports::{
    incoming::use_cases::{GalleryError, UpdateGalleryImageCommand, UpdateGalleryImageUseCase},
    outgoing::{GalleryChanges, GalleryRepository},
};
use crate::modules::gallery::domain::GalleryImage;

pub struct UpdateGalleryImageService<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> UpdateGalleryImageService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateGalleryImageUseCase for UpdateGalleryImageService<R>
where
    R: GalleryRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateGalleryImageCommand,
    ) -> Result<GalleryImage, GalleryError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(GalleryError::NotFound)?;

        if command.is_empty() {
            return Ok(current);
        }

        let changes = GalleryChanges {
            caption: command.caption.map(normalize_caption).transpose()?,
            display_order: command.order,
        };

        let image = self.repository.update(id, changes).await?;
        info!(image_id = %id, "Gallery image info updated");
        Ok(image)
    }
}
