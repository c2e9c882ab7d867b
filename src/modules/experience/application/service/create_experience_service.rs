use async_trait::async_trait;
use tracing::info;

use super::normalize_date;
use crate::modules::experience::application::ports::{
    incoming::use_cases::{CreateExperienceCommand, CreateExperienceUseCase, ExperienceError},
    outgoing::{ExperienceRepository, NewExperience},
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::application::services::BilingualWriter;

pub struct CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError> {
        if command.name.is_blank() {
            return Err(ExperienceError::NameRequired);
        }

        let date = if command.in_progress {
            None
        } else {
            normalize_date(command.date)?
        };
        let name = self.writer.resolve(command.name).await;

        let item = self
            .repository
            .create(NewExperience {
                name,
                date,
                in_progress: command.in_progress,
                display_order: command.order,
            })
            .await?;

        info!(experience_id = %item.id, "Experience created");
        Ok(item)
    }
}
