use std::sync::Arc;

use crate::modules::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryImageUseCase, GetGalleryUseCase, UpdateGalleryImageUseCase,
    UploadGalleryImageUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub list: Arc<dyn GetGalleryUseCase + Send + Sync>,
    pub upload: Arc<dyn UploadGalleryImageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGalleryImageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGalleryImageUseCase + Send + Sync>,
}
