use async_trait::async_trait;

use crate::modules::about::domain::AboutSection;
use crate::modules::media::domain::ImageUpload;
use crate::modules::translation::domain::TranslatableText;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutError {
    #[error("Content is required")]
    ContentRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileImageError {
    #[error("No profile image found")]
    NoProfileImage,

    #[error("Asset store error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Returns the section, creating the default one on first access.
#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutSection, AboutError>;
}

#[async_trait]
pub trait UpdateAboutUseCase: Send + Sync {
    async fn execute(&self, content: TranslatableText) -> Result<AboutSection, AboutError>;
}

#[async_trait]
pub trait UploadProfileImageUseCase: Send + Sync {
    async fn execute(&self, image: ImageUpload) -> Result<AboutSection, ProfileImageError>;
}

#[async_trait]
pub trait DeleteProfileImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<AboutSection, ProfileImageError>;
}
