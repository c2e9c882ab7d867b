use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::UpdateContactCommand;
use crate::modules::contact::domain::ContactInfo;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find(&self) -> Result<Option<ContactInfo>, ContactRepositoryError>;

    /// Creates the empty record unless one exists, then returns the stored row.
    async fn insert_if_absent(&self) -> Result<ContactInfo, ContactRepositoryError>;

    async fn update(
        &self,
        changes: UpdateContactCommand,
    ) -> Result<ContactInfo, ContactRepositoryError>;
}
