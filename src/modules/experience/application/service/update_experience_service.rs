use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::normalize_date;
use crate::modules::experience::application::ports::{
    incoming::use_cases::{ExperienceError, UpdateExperienceCommand, UpdateExperienceUseCase},
    outgoing::{ExperienceChanges, ExperienceRepository},
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::application::services::BilingualWriter;
use crate::shared::patch::PatchField;

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ExperienceError::NotFound)?;

        if command.is_empty() {
            return Ok(current);
        }
        if command.name.as_ref().is_some_and(|name| name.is_blank()) {
            return Err(ExperienceError::NameRequired);
        }

        // The stored flag decides when the request leaves inProgress out
        let in_progress = command.in_progress.unwrap_or(current.in_progress);
        let date = if in_progress {
            PatchField::Null
        } else {
            match command.date {
                PatchField::Unset => PatchField::Unset,
                PatchField::Null => PatchField::Null,
                PatchField::Value(date) => match normalize_date(Some(date))? {
                    Some(date) => PatchField::Value(date),
                    None => PatchField::Null,
                },
            }
        };

        let changes = ExperienceChanges {
            name: self.writer.resolve_patch(command.name).await,
            date,
            in_progress: command.in_progress,
            display_order: command.order,
        };

        let item = self.repository.update(id, changes).await?;
        info!(experience_id = %id, "Experience updated");
        Ok(item)
    }
}
