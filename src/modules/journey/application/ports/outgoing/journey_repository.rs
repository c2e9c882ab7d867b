use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneyRepositoryError {
    #[error("Journey item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJourneyItem {
    pub age: String,
    pub title: BilingualText,
    pub body: BilingualText,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyChanges {
    pub age: Option<String>,
    pub title: Option<BilingualText>,
    pub body: Option<BilingualText>,
    pub display_order: Option<i32>,
}

#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Chronological: `display_order` ascending, oldest first on ties.
    async fn list(&self) -> Result<Vec<JourneyItem>, JourneyRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyItem>, JourneyRepositoryError>;

    async fn create(&self, item: NewJourneyItem) -> Result<JourneyItem, JourneyRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: JourneyChanges,
    ) -> Result<JourneyItem, JourneyRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError>;
}
