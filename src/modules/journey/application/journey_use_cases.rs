use std::sync::Arc;

use crate::modules::journey::application::ports::incoming::use_cases::{
    CreateJourneyItemUseCase, DeleteJourneyItemUseCase, GetJourneyUseCase,
    UpdateJourneyItemUseCase,
};

#[derive(Clone)]
pub struct JourneyUseCases {
    pub list: Arc<dyn GetJourneyUseCase + Send + Sync>,
    pub create: Arc<dyn CreateJourneyItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateJourneyItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteJourneyItemUseCase + Send + Sync>,
}
