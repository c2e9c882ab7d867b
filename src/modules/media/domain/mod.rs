pub mod asset;
pub mod upload_policy;

pub use asset::{AssetFolder, ImageUpload, StoredAsset};
pub use upload_policy::{UploadPolicy, UploadPolicyError};
