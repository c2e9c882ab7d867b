use std::sync::Arc;

use crate::modules::hero::application::ports::incoming::use_cases::{
    DeleteBackgroundImageUseCase, GetHeroUseCase, UpdateHeroUseCase, UploadBackgroundImageUseCase,
};

#[derive(Clone)]
pub struct HeroUseCases {
    pub get: Arc<dyn GetHeroUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateHeroUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadBackgroundImageUseCase + Send + Sync>,
    pub delete_image: Arc<dyn DeleteBackgroundImageUseCase + Send + Sync>,
}
