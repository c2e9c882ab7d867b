use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::BilingualText;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub name: BilingualText,
    pub date: Option<String>,
    pub in_progress: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceChanges {
    pub name: Option<BilingualText>,
    pub date: PatchField<String>,
    pub in_progress: Option<bool>,
    pub display_order: Option<i32>,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Ordered by `display_order` ascending, newest first on ties.
    async fn list(&self) -> Result<Vec<ExperienceItem>, ExperienceRepositoryError>;

    async fn find_by_id(&self, id: Uuid)
        -> Result<Option<ExperienceItem>, ExperienceRepositoryError>;

    async fn create(&self, item: NewExperience)
        -> Result<ExperienceItem, ExperienceRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<ExperienceItem, ExperienceRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
