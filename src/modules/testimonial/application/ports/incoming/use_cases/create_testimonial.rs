use async_trait::async_trait;

use super::TestimonialError;
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::TranslatableText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTestimonialCommand {
    pub name: String,
    pub comment: TranslatableText,
    pub activity_package: Option<TranslatableText>,
    pub order: i32,
}

#[async_trait]
pub trait CreateTestimonialUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError>;
}
