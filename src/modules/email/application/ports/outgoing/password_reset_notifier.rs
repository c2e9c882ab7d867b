#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordResetNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait PasswordResetNotifier: Send + Sync {
    /// `token` is the raw reset token; only its hash is ever stored.
    async fn send_password_reset(
        &self,
        to: &str,
        token: &str,
    ) -> Result<(), PasswordResetNotificationError>;
}
