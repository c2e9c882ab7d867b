use async_trait::async_trait;

use crate::modules::hero::domain::HeroSection;
use crate::modules::media::domain::ImageUpload;
use crate::modules::translation::domain::TranslatableText;

/// Fields left out (or blank) keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateHeroCommand {
    title: Option<TranslatableText>,
    subtitle: Option<TranslatableText>,
}

impl UpdateHeroCommand {
    pub fn new(title: Option<TranslatableText>, subtitle: Option<TranslatableText>) -> Self {
        Self {
            title: title.filter(|t| !t.is_blank()),
            subtitle: subtitle.filter(|t| !t.is_blank()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none()
    }

    pub fn into_parts(self) -> (Option<TranslatableText>, Option<TranslatableText>) {
        (self.title, self.subtitle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackgroundImageError {
    #[error("No background image found")]
    NoBackgroundImage,

    #[error("Asset store error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetHeroUseCase: Send + Sync {
    async fn execute(&self) -> Result<HeroSection, HeroError>;
}

#[async_trait]
pub trait UpdateHeroUseCase: Send + Sync {
    async fn execute(&self, command: UpdateHeroCommand) -> Result<HeroSection, HeroError>;
}

#[async_trait]
pub trait UploadBackgroundImageUseCase: Send + Sync {
    async fn execute(&self, image: ImageUpload) -> Result<HeroSection, BackgroundImageError>;
}

#[async_trait]
pub trait DeleteBackgroundImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HeroSection, BackgroundImageError>;
}
