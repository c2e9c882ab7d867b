use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{DeleteExperienceUseCase, ExperienceError},
    outgoing::ExperienceRepository,
};

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError> {
        self.repository.delete(id).await?;
        info!(experience_id = %id, "Experience deleted");
        Ok(())
    }
}
