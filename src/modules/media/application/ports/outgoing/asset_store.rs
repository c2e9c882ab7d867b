use async_trait::async_trait;

use crate::modules::media::domain::{AssetFolder, ImageUpload, StoredAsset};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetStoreError {
    #[error("Asset store request failed: {0}")]
    Request(String),

    #[error("Asset store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected asset store response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn upload(
        &self,
        image: ImageUpload,
        folder: AssetFolder,
    ) -> Result<StoredAsset, AssetStoreError>;

    /// Removing an asset that no longer exists counts as success.
    async fn destroy(&self, public_id: &str) -> Result<(), AssetStoreError>;
}
