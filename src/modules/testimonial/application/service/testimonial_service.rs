use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::testimonial::application::ports::{
    incoming::use_cases::{
        CreateTestimonialCommand, CreateTestimonialUseCase, DeleteTestimonialUseCase,
        GetTestimonialsUseCase, TestimonialError, UpdateTestimonialCommand,
        UpdateTestimonialUseCase,
    },
    outgoing::{NewTestimonial, TestimonialChanges, TestimonialRepository},
};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::application::services::BilingualWriter;

const MAX_NAME_LEN: usize = 150;

/// Implements every testimonial use case over one repository.
#[derive(Clone)]
pub struct TestimonialService<R>
where
    R: TestimonialRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> TestimonialService<R>
where
    R: TestimonialRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

fn validate_name(name: &str) -> Result<String, TestimonialError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TestimonialError::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(TestimonialError::NameTooLong(MAX_NAME_LEN));
    }
    Ok(name.to_string())
}

#[async_trait]
impl<R> GetTestimonialsUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self) -> Result<Vec<TestimonialItem>, TestimonialError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateTestimonialUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError> {
        let name = validate_name(&command.name)?;
        if command.comment.is_blank() {
            return Err(TestimonialError::CommentRequired);
        }

        let (comment, activity_package) = tokio::join!(
            self.writer.resolve(command.comment),
            self.writer.resolve_optional(command.activity_package)
        );

        let item = self
            .repository
            .create(NewTestimonial {
                name,
                comment,
                activity_package,
                display_order: command.order,
            })
            .await?;

        info!(testimonial_id = %item.id, "Testimonial created");
        Ok(item)
    }
}

#[async_trait]
impl<R> UpdateTestimonialUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TestimonialError::NotFound)?;

        if command.is_empty() {
            return Ok(current);
        }

        let name = command.name.as_deref().map(validate_name).transpose()?;
        if command.comment.as_ref().is_some_and(|c| c.is_blank()) {
            return Err(TestimonialError::CommentRequired);
        }

        let (comment, activity_package) = tokio::join!(
            self.writer.resolve_patch(command.comment),
            self.writer.resolve_nullable_patch(command.activity_package)
        );

        let item = self
            .repository
            .update(
                id,
                TestimonialChanges {
                    name,
                    comment,
                    activity_package,
                    display_order: command.order,
                },
            )
            .await?;

        info!(testimonial_id = %id, "Testimonial updated");
        Ok(item)
    }
}

#[async_trait]
impl<R> DeleteTestimonialUseCase for TestimonialService<R>
where
    R: TestimonialRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), TestimonialError> {
        self.repository.delete(id).await?;
        info!(testimonial_id = %id, "Testimonial deleted");
        Ok(())
    }
}
