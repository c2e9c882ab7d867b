use async_trait::async_trait;
use uuid::Uuid;

use super::TestimonialError;
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::patch::PatchField;

/// A null or blank `activity_package` removes the stored package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTestimonialCommand {
    pub name: Option<String>,
    pub comment: Option<TranslatableText>,
    pub activity_package: PatchField<TranslatableText>,
    pub order: Option<i32>,
}

impl UpdateTestimonialCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.comment.is_none()
            && self.activity_package.is_unset()
            && self.order.is_none()
    }
}

#[async_trait]
pub trait UpdateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError>;
}
