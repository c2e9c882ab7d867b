use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::domain::Admin;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Admin not found")]
    NotFound,

    #[error("Admin email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError>;

    async fn any_exists(&self) -> Result<bool, AdminRepositoryError>;

    async fn create(&self, email: &str, password_hash: &str)
        -> Result<Admin, AdminRepositoryError>;

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AdminRepositoryError>;

    /// Replaces any previous reset token for this admin.
    async fn store_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AdminRepositoryError>;

    /// Finds the admin holding `token_hash`, provided it expires after `now`.
    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Admin>, AdminRepositoryError>;

    /// Sets the new password and clears the token in one statement.
    /// Returns false if the token was already used or has expired.
    async fn redeem_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        new_password_hash: &str,
    ) -> Result<bool, AdminRepositoryError>;
}
