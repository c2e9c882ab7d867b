use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::{PasswordPolicy, PasswordPolicyError};
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, PasswordHasher,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Admin not found")]
    AdminNotFound,

    #[error("Current password is incorrect")]
    IncorrectCurrentPassword,

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        admin_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase {
    repository: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    policy: Arc<dyn PasswordPolicy>,
}

impl ChangePasswordUseCase {
    pub fn new(
        repository: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            policy,
        }
    }
}

#[async_trait]
impl IChangePasswordUseCase for ChangePasswordUseCase {
    async fn execute(
        &self,
        admin_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        let admin = self
            .repository
            .find_by_id(admin_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::AdminNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(current_password, &admin.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        if !matches {
            return Err(ChangePasswordError::IncorrectCurrentPassword);
        }

        self.policy.validate(new_password)?;

        let new_hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(admin.id, &new_hash)
            .await
            .map_err(|e| match e {
                AdminRepositoryError::NotFound => ChangePasswordError::AdminNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(admin_id = %admin.id, "Password changed");
        Ok(())
    }
}
