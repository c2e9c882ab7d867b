use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::journey::application::ports::outgoing::JourneyRepositoryError;
use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::domain::TranslatableText;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneyError {
    #[error("{0} is required")]
    FieldRequired(&'static str),

    #[error("Age must be at most {0} characters")]
    AgeTooLong(usize),

    #[error("Journey item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<JourneyRepositoryError> for JourneyError {
    fn from(e: JourneyRepositoryError) -> Self {
        match e {
            JourneyRepositoryError::NotFound => JourneyError::NotFound,
            JourneyRepositoryError::DatabaseError(msg) => JourneyError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJourneyItemCommand {
    pub age: String,
    pub title: TranslatableText,
    pub body: TranslatableText,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateJourneyItemCommand {
    pub age: Option<String>,
    pub title: Option<TranslatableText>,
    pub body: Option<TranslatableText>,
    pub order: Option<i32>,
}

impl UpdateJourneyItemCommand {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.title.is_none() && self.body.is_none() && self.order.is_none()
    }
}

#[async_trait]
pub trait GetJourneyUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<JourneyItem>, JourneyError>;
}

#[async_trait]
pub trait CreateJourneyItemUseCase: Send + Sync {
    async fn execute(&self, command: CreateJourneyItemCommand)
        -> Result<JourneyItem, JourneyError>;
}

#[async_trait]
pub trait UpdateJourneyItemUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateJourneyItemCommand,
    ) -> Result<JourneyItem, JourneyError>;
}

#[async_trait]
pub trait DeleteJourneyItemUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), JourneyError>;
}
