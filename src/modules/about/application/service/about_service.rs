use async_trait::async_trait;
use tracing::info;

use crate::modules::about::application::ports::{
    incoming::use_cases::{AboutError, GetAboutUseCase, UpdateAboutUseCase},
    outgoing::{AboutRepository, AboutRepositoryError},
};
use crate::modules::about::domain::{AboutSection, DEFAULT_ABOUT_CONTENT};
use crate::modules::translation::application::services::BilingualWriter;
use crate::modules::translation::domain::TranslatableText;

#[derive(Clone)]
pub struct AboutService<R>
where
    R: AboutRepository,
{
    repository: R,
    writer: BilingualWriter,
}

impl<R> AboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R, writer: BilingualWriter) -> Self {
        Self { repository, writer }
    }
}

/// Reads the section, materialising the default on first access.
///
/// The default is only translated when no row exists, so steady-state reads
/// never reach the translator.
pub(super) async fn load_or_create<R>(
    repository: &R,
    writer: &BilingualWriter,
) -> Result<AboutSection, AboutRepositoryError>
where
    R: AboutRepository + ?Sized,
{
    if let Some(section) = repository.find().await? {
        return Ok(section);
    }

    let content = writer
        .resolve(TranslatableText::from(DEFAULT_ABOUT_CONTENT))
        .await;
    let section = repository.insert_if_absent(content).await?;
    info!("About section created with default content");
    Ok(section)
}

#[async_trait]
impl<R> GetAboutUseCase for AboutService<R>
where
    R: AboutRepository,
{
    async fn execute(&self) -> Result<AboutSection, AboutError> {
        load_or_create(&self.repository, &self.writer)
            .await
            .map_err(|e| AboutError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R> UpdateAboutUseCase for AboutService<R>
where
    R: AboutRepository,
{
    async fn execute(&self, content: TranslatableText) -> Result<AboutSection, AboutError> {
        if content.is_blank() {
            return Err(AboutError::ContentRequired);
        }

        let content = self.writer.resolve(content).await;

        self.repository
            .save_content(content)
            .await
            .map_err(|e| AboutError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::repositories::InMemoryAboutRepository;
    use crate::tests::support::stubs::{prefix_writer, CountingTranslator};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_get_creates_translated_default() {
        let repo = InMemoryAboutRepository::default();
        let service = AboutService::new(repo.clone(), prefix_writer());

        let section = GetAboutUseCase::execute(&service).await.unwrap();

        assert_eq!(section.content.en, "Welcome to our portfolio!");
        assert_eq!(section.content.ar, "ar:Welcome to our portfolio!");
        assert!(section.profile_image_url.is_none());
    }

    #[tokio::test]
    async fn test_second_get_returns_same_document_without_translating() {
        let translator = Arc::new(CountingTranslator::default());
        let repo = InMemoryAboutRepository::default();
        let service = AboutService::new(repo, BilingualWriter::new(translator.clone()));

        let first = GetAboutUseCase::execute(&service).await.unwrap();
        let second = GetAboutUseCase::execute(&service).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(translator.calls(), 1);
    }

    #[tokio::test]
    async fn test_update_translates_content() {
        let repo = InMemoryAboutRepository::default();
        let service = AboutService::new(repo.clone(), prefix_writer());

        let section = UpdateAboutUseCase::execute(&service, "I build things".into())
            .await
            .unwrap();

        assert_eq!(section.content.en, "I build things");
        assert_eq!(section.content.ar, "ar:I build things");
        assert_eq!(repo.current().unwrap().content, section.content);
    }

    #[tokio::test]
    async fn test_update_keeps_supplied_arabic() {
        let service = AboutService::new(InMemoryAboutRepository::default(), prefix_writer());

        let content = TranslatableText::Pair {
            en: "Hello".to_string(),
            ar: Some("مرحبا".to_string()),
        };
        let section = UpdateAboutUseCase::execute(&service, content).await.unwrap();

        assert_eq!(section.content.ar, "مرحبا");
    }

    #[tokio::test]
    async fn test_blank_update_rejected_without_write() {
        let repo = InMemoryAboutRepository::default();
        let service = AboutService::new(repo.clone(), prefix_writer());

        let result = UpdateAboutUseCase::execute(&service, "   ".into()).await;

        assert_eq!(result, Err(AboutError::ContentRequired));
        assert!(repo.current().is_none());
    }

    #[tokio::test]
    async fn test_repository_failure_is_mapped() {
        let repo = InMemoryAboutRepository::failing();
        let service = AboutService::new(repo, prefix_writer());

        let result = GetAboutUseCase::execute(&service).await;

        assert!(matches!(result, Err(AboutError::RepositoryError(_))));
    }
}
