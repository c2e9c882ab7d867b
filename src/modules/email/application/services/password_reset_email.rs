use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    EmailSender, PasswordResetNotificationError, PasswordResetNotifier,
};
use crate::shared::config::optional_or;

const SUBJECT: &str = "Password Reset Request";
const DEFAULT_RESET_URL: &str = "http://localhost:3000/reset-password";

#[derive(Clone)]
pub struct PasswordResetEmailService {
    sender: Arc<dyn EmailSender>,
    reset_url: String,
}

impl fmt::Debug for PasswordResetEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("reset_url", &self.reset_url)
            .finish()
    }
}

impl PasswordResetEmailService {
    pub fn new(sender: Arc<dyn EmailSender>, reset_url: impl Into<String>) -> Self {
        Self {
            sender,
            reset_url: reset_url.into(),
        }
    }

    /// Reset page URL from `PASSWORD_RESET_URL`.
    pub fn from_env(sender: Arc<dyn EmailSender>) -> Self {
        Self::new(sender, optional_or("PASSWORD_RESET_URL", DEFAULT_RESET_URL))
    }

    fn reset_link(&self, token: &str) -> String {
        format!("{}?token={}", self.reset_url, token)
    }

    fn render_body(link: &str) -> String {
        format!(
            r#"<h2>Password Reset Request</h2>
<p>Click the link below to reset your password:</p>
<a href="{link}">{link}</a>
<p>This link will expire in 1 hour.</p>
<p>If you didn't request this, please ignore this email.</p>"#
        )
    }
}

#[async_trait]
impl PasswordResetNotifier for PasswordResetEmailService {
    async fn send_password_reset(
        &self,
        to: &str,
        token: &str,
    ) -> Result<(), PasswordResetNotificationError> {
        let body = Self::render_body(&self.reset_link(token));

        self.sender
            .send_email(to, SUBJECT, &body)
            .await
            .map_err(|e| PasswordResetNotificationError::EmailSendingFailed(e.to_string()))
    }
}
