use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::domain::ContactInfo;

const MAX_EMAIL_LEN: usize = 255;
const MAX_NAME_LEN: usize = 150;
const MAX_INSTAGRAM_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Present fields replace the stored value, including with an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateContactCommand {
    pub email: Option<String>,
    pub name: Option<String>,
    pub instagram_handle: Option<String>,
}

impl UpdateContactCommand {
    pub fn new(
        email: Option<String>,
        name: Option<String>,
        instagram_handle: Option<String>,
    ) -> Result<Self, ContactError> {
        let email = email.map(|e| e.trim().to_string());
        let name = name.map(|n| n.trim().to_string());
        let instagram_handle = instagram_handle.map(|h| h.trim().to_string());

        if let Some(email) = email.as_deref() {
            if !email.is_empty() && !EmailAddress::is_valid(email) {
                return Err(ContactError::InvalidEmail);
            }
            check_len("email", email, MAX_EMAIL_LEN)?;
        }
        if let Some(name) = name.as_deref() {
            check_len("name", name, MAX_NAME_LEN)?;
        }
        if let Some(handle) = instagram_handle.as_deref() {
            check_len("instagramHandle", handle, MAX_INSTAGRAM_LEN)?;
        }

        Ok(Self {
            email,
            name,
            instagram_handle,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.instagram_handle.is_none()
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.chars().count() > max {
        return Err(ContactError::TooLong { field, max });
    }
    Ok(())
}

#[async_trait]
pub trait GetContactUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactInfo, ContactError>;
}

#[async_trait]
pub trait UpdateContactUseCase: Send + Sync {
    async fn execute(&self, command: UpdateContactCommand) -> Result<ContactInfo, ContactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_email_is_allowed() {
        let command = UpdateContactCommand::new(Some("".to_string()), None, None).unwrap();
        assert_eq!(command.email.as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = UpdateContactCommand::new(Some("not-an-email".to_string()), None, None);
        assert_eq!(result, Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_values_are_trimmed() {
        let command = UpdateContactCommand::new(
            Some(" sam@example.com ".to_string()),
            Some(" Sam ".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(command.email.as_deref(), Some("sam@example.com"));
        assert_eq!(command.name.as_deref(), Some("Sam"));
        assert!(command.instagram_handle.is_none());
    }

    #[test]
    fn test_long_handle_rejected() {
        let result = UpdateContactCommand::new(None, None, Some("a".repeat(101)));
        assert_eq!(
            result,
            Err(ContactError::TooLong {
                field: "instagramHandle",
                max: 100
            })
        );
    }
}
