use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::journey::application::ports::{
    incoming::use_cases::{
        CreateJourneyItemCommand, CreateJourneyItemUseCase, DeleteJourneyItemUseCase,
        GetJourneyUseCase, JourneyError, UpdateJourneyItemCommand, UpdateJourneyItemUseCase,
    },
    outgoing::{JourneyChanges, JourneyRepository, NewJourneyItem},
};
use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::application::services::BilingualWriter;
use crate::modules::translation::domain::TranslatableText;

const MAX_AGE_LEN: usize = 50;

#[derive(Clone)]
pub struct JourneyService<R>
where
    R: JourneyRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> JourneyService<R>
where
    R: JourneyRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

fn validate_age(age: &str) -> Result<String, JourneyError> {
    let age = age.trim();
    if age.is_empty() {
        return Err(JourneyError::FieldRequired("Age"));
    }
    if age.chars().count() > MAX_AGE_LEN {
        return Err(JourneyError::AgeTooLong(MAX_AGE_LEN));
    }
    Ok(age.to_string())
}

fn require_text(field: &'static str, text: &TranslatableText) -> Result<(), JourneyError> {
    if text.is_blank() {
        return Err(JourneyError::FieldRequired(field));
    }
    Ok(())
}

#[async_trait]
impl<R> GetJourneyUseCase for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn execute(&self) -> Result<Vec<JourneyItem>, JourneyError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateJourneyItemUseCase for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn execute(
        &self,
        command: CreateJourneyItemCommand,
    ) -> Result<JourneyItem, JourneyError> {
        let age = validate_age(&command.age)?;
        require_text("Title", &command.title)?;
        require_text("Body", &command.body)?;

        let (title, body) = tokio::join!(
            self.writer.resolve(command.title),
            self.writer.resolve(command.body)
        );

        let item = self
            .repository
            .create(NewJourneyItem {
                age,
                title,
                body,
                display_order: command.order,
            })
            .await?;

        info!(journey_item_id = %item.id, "Journey item created");
        Ok(item)
    }
}

#[async_trait]
impl<R> UpdateJourneyItemUseCase for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateJourneyItemCommand,
    ) -> Result<JourneyItem, JourneyError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(JourneyError::NotFound)?;

        if command.is_empty() {
            return Ok(current);
        }

        let age = command.age.as_deref().map(validate_age).transpose()?;
        if let Some(title) = &command.title {
            require_text("Title", title)?;
        }
        if let Some(body) = &command.body {
            require_text("Body", body)?;
        }

        let (title, body) = tokio::join!(
            self.writer.resolve_patch(command.title),
            self.writer.resolve_patch(command.body)
        );

        let item = self
            .repository
            .update(
                id,
                JourneyChanges {
                    age,
                    title,
                    body,
                    display_order: command.order,
                },
            )
            .await?;

        info!(journey_item_id = %id, "Journey item updated");
        Ok(item)
    }
}

#[async_trait]
impl<R> DeleteJourneyItemUseCase for JourneyService<R>
where
    R: JourneyRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), JourneyError> {
        self.repository.delete(id).await?;
        info!(journey_item_id = %id, "Journey item deleted");
        Ok(())
    }
}
