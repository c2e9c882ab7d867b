use async_trait::async_trait;
use tracing::info;

use crate::modules::hero::application::ports::{
    incoming::use_cases::{GetHeroUseCase, HeroError, UpdateHeroCommand, UpdateHeroUseCase},
    outgoing::{HeroRepository, HeroRepositoryError},
};
use crate::modules::hero::domain::{default_subtitle, default_title, HeroSection};
use crate::modules::translation::application::services::BilingualWriter;

#[derive(Clone)]
pub struct HeroService<R>
where
    R: HeroRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> HeroService<R>
where
    R: HeroRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

pub(super) async fn load_or_create<R>(repository: &R) -> Result<HeroSection, HeroRepositoryError>
where
    R: HeroRepository + ?Sized,
{
    if let Some(section) = repository.find().await? {
        return Ok(section);
    }

    let section = repository
        .insert_if_absent(default_title(), default_subtitle())
        .await?;
    info!("Hero section created with default text");
    Ok(section)
}

#[async_trait]
impl<R> GetHeroUseCase for HeroService<R>
where
    R: HeroRepository,
{
    async fn execute(&self) -> Result<HeroSection, HeroError> {
        load_or_create(&self.repository)
            .await
            .map_err(|e| HeroError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateHeroUseCase for HeroService<R>
where
    R: HeroRepository,
{
    async fn execute(&self, command: UpdateHeroCommand) -> Result<HeroSection, HeroError> {
        let current = load_or_create(&self.repository)
            .await
            .map_err(|e| HeroError::RepositoryError(e.to_string()))?;

        if command.is_empty() {
            return Ok(current);
        }

        let (title, subtitle) = command.into_parts();
        let (title, subtitle) = tokio::join!(
            self.writer.resolve_patch(title),
            self.writer.resolve_patch(subtitle)
        );

        self.repository
            .update_text(title, subtitle)
            .await
            .map_err(|e| HeroError::RepositoryError(e.to_string()))
    }
}
