use async_trait::async_trait;

use super::ExperienceError;
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::TranslatableText;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExperienceCommand {
    pub name: TranslatableText,
    pub date: Option<String>,
    pub in_progress: bool,
    pub order: i32,
}

#[async_trait]
pub trait CreateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError>;
}
