use async_trait::async_trait;
use uuid::Uuid;

use super::ExperienceError;
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::patch::PatchField;

/// `date` distinguishes "keep" (Unset) from "clear" (Null).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateExperienceCommand {
    pub name: Option<TranslatableText>,
    pub date: PatchField<String>,
    pub in_progress: Option<bool>,
    pub order: Option<i32>,
}

impl UpdateExperienceCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_unset()
            && self.in_progress.is_none()
            && self.order.is_none()
    }
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: UpdateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError>;
}
