use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::incoming::{PasswordPolicy, PasswordPolicyError};
use crate::auth::application::ports::outgoing::{AdminRepository, PasswordHasher};
use crate::auth::application::services::hash::hash_token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase {
    repository: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    policy: Arc<dyn PasswordPolicy>,
}

impl ResetPasswordUseCase {
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
impl IResetPasswordUseCase for ResetPasswordUseCase {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ResetPasswordError::InvalidOrExpiredToken);
        }

        self.policy.validate(new_password)?;

        let token_hash = hash_token(token);
        let now = Utc::now();

        let admin = self
            .repository
            .find_by_reset_token(&token_hash, now)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        let new_hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        // A concurrent reset with the same token loses here
        let redeemed = self
            .repository
            .redeem_reset_token(admin.id, &token_hash, now, &new_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        if !redeemed {
            return Err(ResetPasswordError::InvalidOrExpiredToken);
        }

        info!(admin_id = %admin.id, "Password reset completed");
        Ok(())
    }
}
