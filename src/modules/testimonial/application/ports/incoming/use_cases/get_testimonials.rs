use async_trait::async_trait;

use super::TestimonialError;
use crate::modules::testimonial::domain::TestimonialItem;

#[async_trait]
pub trait GetTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TestimonialItem>, TestimonialError>;
}
