use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use super::normalize_caption;
use crate::modules::gallery::application::ports::{
    incoming::use_cases::{GalleryError, UploadGalleryImageCommand, UploadGalleryImageUseCase},
    outgoing::{GalleryRepository, NewGalleryImage},
};
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::media::application::ports::outgoing::AssetStore;
use crate::modules::media::domain::AssetFolder;

pub struct UploadGalleryImageService<R>
where
    R: GalleryRepository,
{
    repository: R,
    store: Arc<dyn AssetStore>,
}

impl<R> UploadGalleryImageService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R, store: Arc<dyn AssetStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> UploadGalleryImageUseCase for UploadGalleryImageService<R>
where
    R: GalleryRepository,
{
    async fn execute(
        &self,
        command: UploadGalleryImageCommand,
    ) -> Result<GalleryImage, GalleryError> {
        let caption = normalize_caption(command.caption)?;

        let asset = self
            .store
            .upload(command.image, AssetFolder::Gallery)
            .await
            .map_err(|e| GalleryError::StorageError(e.to_string()))?;
        let public_id = asset.public_id.clone();

        let created = self
            .repository
            .create(NewGalleryImage {
                asset,
                caption,
                display_order: command.order,
            })
            .await;

        match created {
            Ok(image) => {
                info!(image_id = %image.id, public_id = %image.public_id, "Gallery image stored");
                Ok(image)
            }
            Err(e) => {
                // The row never landed, so the hosted copy would be unreachable
                if let Err(cleanup) = self.store.destroy(&public_id).await {
                    warn!(public_id = %public_id, error = %cleanup, "Orphaned gallery asset");
                }
                Err(e.into())
            }
        }
    }
}
