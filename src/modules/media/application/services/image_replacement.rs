use tracing::info;

use crate::modules::media::application::ports::outgoing::{AssetStore, AssetStoreError};
use crate::modules::media::domain::{AssetFolder, ImageUpload, StoredAsset};

/// Swaps the image held by a singleton section.
///
/// The previous asset is destroyed before the new one is uploaded. If the
/// upload then fails the section keeps pointing at a deleted asset; callers
/// report that as a failed upload and the admin retries.
pub async fn replace_image(
    store: &dyn AssetStore,
    previous_public_id: Option<&str>,
    image: ImageUpload,
    folder: AssetFolder,
) -> Result<StoredAsset, AssetStoreError> {
    if let Some(public_id) = previous_public_id {
        store.destroy(public_id).await?;
        info!(public_id, folder = folder.name(), "Previous image removed");
    }

    store.upload(image, folder).await
}
