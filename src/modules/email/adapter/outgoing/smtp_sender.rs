use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::application::ports::outgoing::{EmailError, EmailSender};
use crate::shared::config::{parse_or, required, runtime_env, ConfigError};

/// SMTP settings. `RUST_ENV=test` targets an unauthenticated local catcher
/// (Mailpit, MailHog) instead of a TLS relay.
#[derive(Debug, Clone)]
pub enum EmailConfig {
    Relay {
        server: String,
        username: String,
        password: String,
        from: String,
    },
    Local {
        host: String,
        port: u16,
        from: String,
    },
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let from = required("EMAIL_FROM")?;

        if runtime_env() == "test" {
            return Ok(EmailConfig::Local {
                host: required("SMTP_HOST")?,
                port: parse_or("SMTP_PORT", 1025u16)?,
                from,
            });
        }

        Ok(EmailConfig::Relay {
            server: required("SMTP_SERVER")?,
            username: required("SMTP_USERNAME")?,
            password: required("SMTP_PASSWORD")?,
            from,
        })
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Result<Self, EmailError> {
        match config {
            EmailConfig::Relay {
                server,
                username,
                password,
                from,
            } => {
                let creds = Credentials::new(username.clone(), password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| EmailError::Transport(e.to_string()))?
                    .credentials(creds)
                    .build();

                Ok(Self::new_with_mailer(Box::new(transport), from))
            }
            EmailConfig::Local { host, port, from } => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                    .port(*port)
                    .build();

                Ok(Self::new_with_mailer(Box::new(transport), from))
            }
        }
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_email
                    .parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("from: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("to: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer.send(email).await.map_err(EmailError::Transport)
    }
}
