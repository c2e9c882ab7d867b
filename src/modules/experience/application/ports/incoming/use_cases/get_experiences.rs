use async_trait::async_trait;

use super::ExperienceError;
use crate::modules::experience::domain::ExperienceItem;

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceItem>, ExperienceError>;
}
