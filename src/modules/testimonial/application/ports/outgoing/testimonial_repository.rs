use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::BilingualText;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    pub comment: BilingualText,
    pub activity_package: Option<BilingualText>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialChanges {
    pub name: Option<String>,
    pub comment: Option<BilingualText>,
    pub activity_package: PatchField<BilingualText>,
    pub display_order: Option<i32>,
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Ordered by `display_order` ascending, newest first on ties.
    async fn list(&self) -> Result<Vec<TestimonialItem>, TestimonialRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TestimonialItem>, TestimonialRepositoryError>;

    async fn create(
        &self,
        item: NewTestimonial,
    ) -> Result<TestimonialItem, TestimonialRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: TestimonialChanges,
    ) -> Result<TestimonialItem, TestimonialRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError>;
}
