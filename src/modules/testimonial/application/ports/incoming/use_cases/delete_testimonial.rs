use async_trait::async_trait;
use uuid::Uuid;

use super::TestimonialError;

#[async_trait]
pub trait DeleteTestimonialUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), TestimonialError>;
}
