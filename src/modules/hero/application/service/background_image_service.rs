use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::hero_service::load_or_create;
use crate::modules::hero::application::ports::{
    incoming::use_cases::{
        BackgroundImageError, DeleteBackgroundImageUseCase, UploadBackgroundImageUseCase,
    },
    outgoing::HeroRepository,
};
use crate::modules::hero::domain::HeroSection;
use crate::modules::media::application::ports::outgoing::AssetStore;
use crate::modules::media::application::services::replace_image;
use crate::modules::media::domain::{AssetFolder, ImageUpload};

#[derive(Clone)]
pub struct BackgroundImageService<R>
where
    R: HeroRepository,
{
    repository: R,
    store: Arc<dyn AssetStore>,
}

impl<R> BackgroundImageService<R>
where
    R: HeroRepository,
{
    pub fn new(repository: R, store: Arc<dyn AssetStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> UploadBackgroundImageUseCase for BackgroundImageService<R>
where
    R: HeroRepository,
{
    async fn execute(&self, image: ImageUpload) -> Result<HeroSection, BackgroundImageError> {
        let section = load_or_create(&self.repository)
            .await
            .map_err(|e| BackgroundImageError::RepositoryError(e.to_string()))?;

        let stored = replace_image(
            self.store.as_ref(),
            section.background_image_public_id.as_deref(),
            image,
            AssetFolder::Hero,
        )
        .await
        .map_err(|e| BackgroundImageError::StorageError(e.to_string()))?;

        info!(public_id = %stored.public_id, "Hero background stored");

        self.repository
            .set_background_image(Some(stored))
            .await
            .map_err(|e| BackgroundImageError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> DeleteBackgroundImageUseCase for BackgroundImageService<R>
where
    R: HeroRepository,
{
    async fn execute(&self) -> Result<HeroSection, BackgroundImageError> {
        let public_id = self
            .repository
            .find()
            .await
            .map_err(|e| BackgroundImageError::RepositoryError(e.to_string()))?
            .and_then(|section| section.background_image_public_id)
            .ok_or(BackgroundImageError::NoBackgroundImage)?;

        self.store
            .destroy(&public_id)
            .await
            .map_err(|e| BackgroundImageError::StorageError(e.to_string()))?;

        self.repository
            .set_background_image(None)
            .await
            .map_err(|e| BackgroundImageError::RepositoryError(e.to_string()))
    }
}
