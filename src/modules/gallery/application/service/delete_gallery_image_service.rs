use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::modules::gallery::application::ports::{
    incoming::use_cases::{DeleteGalleryImageUseCase, GalleryError},
    outgoing::GalleryRepository,
};
use crate::modules::media::application::ports::outgoing::AssetStore;

pub struct DeleteGalleryImageService<R>
where
    R: GalleryRepository,
{
    repository: R,
    store: Arc<dyn AssetStore>,
}

impl<R> DeleteGalleryImageService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R, store: Arc<dyn AssetStore>) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R> DeleteGalleryImageUseCase for DeleteGalleryImageService<R>
where
    R: GalleryRepository,
{
    /// The hosted asset goes first; a failure there leaves the row in place
    /// so the delete can be retried.
    async fn execute(&self, id: Uuid) -> Result<(), GalleryError> {
        let image = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(GalleryError::NotFound)?;

        self.store
            .destroy(&image.public_id)
            .await
            .map_err(|e| GalleryError::StorageError(e.to_string()))?;

        self.repository.delete(id).await?;
        info!(image_id = %id, public_id = %image.public_id, "Gallery image deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gallery::application::ports::outgoing::NewGalleryImage;
    use crate::modules::media::domain::StoredAsset;
    use crate::tests::support::repositories::InMemoryGalleryRepository;
    use crate::tests::support::stubs::RecordingAssetStore;

    async fn seeded(repo: &InMemoryGalleryRepository) -> Uuid {
        repo.create(NewGalleryImage {
            asset: StoredAsset {
                url: "https://cdn.test/a.png".to_string(),
                public_id: "portfolio_gallery/a".to_string(),
            },
            caption: String::new(),
            display_order: 0,
        })
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_destroys_asset_once_and_removes_row() {
        let repo = InMemoryGalleryRepository::default();
        let id = seeded(&repo).await;
        let store = Arc::new(RecordingAssetStore::default());
        let service = DeleteGalleryImageService::new(repo.clone(), store.clone());

        service.execute(id).await.unwrap();

        assert_eq!(store.events(), vec!["destroy:portfolio_gallery/a".to_string()]);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_id_never_touches_store() {
        let store = Arc::new(RecordingAssetStore::default());
        let service =
            DeleteGalleryImageService::new(InMemoryGalleryRepository::default(), store.clone());

        let result = service.execute(Uuid::new_v4()).await;

        assert_eq!(result, Err(GalleryError::NotFound));
        assert!(store.events().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_row() {
        let repo = InMemoryGalleryRepository::default();
        let id = seeded(&repo).await;
        let store = Arc::new(RecordingAssetStore::failing_destroy());
        let service = DeleteGalleryImageService::new(repo.clone(), store);

        let result = service.execute(id).await;

        assert!(matches!(result, Err(GalleryError::StorageError(_))));
        assert_eq!(repo.len(), 1);
    }
}
