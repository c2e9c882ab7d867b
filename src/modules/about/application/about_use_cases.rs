use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteProfileImageUseCase, GetAboutUseCase, UpdateAboutUseCase, UploadProfileImageUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAboutUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadProfileImageUseCase + Send + Sync>,
    pub delete_image: Arc<dyn DeleteProfileImageUseCase + Send + Sync>,
}
