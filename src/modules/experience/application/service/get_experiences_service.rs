use async_trait::async_trait;

use crate::modules::experience::application::ports::{
    incoming::use_cases::{ExperienceError, GetExperiencesUseCase},
    outgoing::ExperienceRepository,
};
use crate::modules::experience::domain::ExperienceItem;

pub struct GetExperiencesService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetExperiencesService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperiencesUseCase for GetExperiencesService<R>
where
    R: ExperienceRepository,
{
    async fn execute(&self) -> Result<Vec<ExperienceItem>, ExperienceError> {
        Ok(self.repository.list().await?)
    }
}
