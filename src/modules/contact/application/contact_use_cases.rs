use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactUseCase, UpdateContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get: Arc<dyn GetContactUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateContactUseCase + Send + Sync>,
}
