use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::about_service::load_or_create;
use crate::modules::about::application::ports::{
    incoming::use_cases::{DeleteProfileImageUseCase, ProfileImageError, UploadProfileImageUseCase},
    outgoing::AboutRepository,
};
use crate::modules::about::domain::AboutSection;
use crate::modules::media::application::ports::outgoing::AssetStore;
use crate::modules::media::application::services::replace_image;
use crate::modules::media::domain::{AssetFolder, ImageUpload};
use crate::modules::translation::application::services::BilingualWriter;

#[derive(Clone)]
pub struct ProfileImageService<R>
where
    R: AboutRepository,
{
    repository: R,
    writer: BilingualWriter,
    store: Arc<dyn AssetStore>,
}

impl<R> ProfileImageService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R, writer: BilingualWriter, store: Arc<dyn AssetStore>) -> Self {
        Self {
            repository,
            writer,
            store,
        }
    }
}

#[async_trait]
impl<R> UploadProfileImageUseCase for ProfileImageService<R>
where
    R: AboutRepository,
{
    async fn execute(&self, image: ImageUpload) -> Result<AboutSection, ProfileImageError> {
        let section = load_or_create(&self.repository, &self.writer)
            .await
            .map_err(|e| ProfileImageError::RepositoryError(e.to_string()))?;

        let stored = replace_image(
            self.store.as_ref(),
            section.profile_image_public_id.as_deref(),
            image,
            AssetFolder::Profile,
        )
        .await
        .map_err(|e| ProfileImageError::StorageError(e.to_string()))?;

        info!(public_id = %stored.public_id, "Profile image stored");

        self.repository
            .set_profile_image(Some(stored))
            .await
            .map_err(|e| ProfileImageError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> DeleteProfileImageUseCase for ProfileImageService<R>
where
    R: AboutRepository,
{
    async fn execute(&self) -> Result<AboutSection, ProfileImageError> {
        let public_id = self
            .repository
            .find()
            .await
            .map_err(|e| ProfileImageError::RepositoryError(e.to_string()))?
            .and_then(|section| section.profile_image_public_id)
            .ok_or(ProfileImageError::NoProfileImage)?;

        self.store
            .destroy(&public_id)
            .await
            .map_err(|e| ProfileImageError::StorageError(e.to_string()))?;

        self.repository
            .set_profile_image(None)
            .await
            .map_err(|e| ProfileImageError::RepositoryError(e.to_string()))
    }
}
