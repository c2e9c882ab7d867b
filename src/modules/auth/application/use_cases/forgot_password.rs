use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::outgoing::AdminRepository;
use crate::auth::application::services::hash::{generate_reset_token, hash_token};
use crate::auth::domain::admin::normalize_email;
use crate::email::application::ports::outgoing::PasswordResetNotifier;

const RESET_TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Email is required")]
    EmptyEmail,

    #[error("User not found")]
    AdminNotFound,

    #[error("Email sending failed: {0}")]
    NotificationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError>;
}

pub struct ForgotPasswordUseCase {
    repository: Arc<dyn AdminRepository>,
    notifier: Arc<dyn PasswordResetNotifier>,
}

impl ForgotPasswordUseCase {
    pub fn new(
        repository: Arc<dyn AdminRepository>,
        notifier: Arc<dyn PasswordResetNotifier>,
    ) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl IForgotPasswordUseCase for ForgotPasswordUseCase {
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ForgotPasswordError::EmptyEmail);
        }

        let admin = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ForgotPasswordError::AdminNotFound)?;

        let token = generate_reset_token();
        let expires_at = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);

        self.repository
            .store_reset_token(admin.id, &hash_token(&token), expires_at)
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_password_reset(&admin.email, &token)
            .await
            .map_err(|e| ForgotPasswordError::NotificationFailed(e.to_string()))?;

        info!(admin_id = %admin.id, "Password reset email sent");
        Ok(())
    }
}
