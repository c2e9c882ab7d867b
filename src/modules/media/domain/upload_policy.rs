use super::asset::{AssetFolder, ImageUpload};

const MIB: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Only image files are allowed")]
    NotAnImage,

    #[error("File too large (max {max_mib} MB)")]
    TooLarge { max_mib: usize },

    #[error("Uploaded file is empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
}

impl UploadPolicy {
    /// Hero backgrounds are full-bleed and get a larger allowance.
    pub fn for_folder(folder: AssetFolder) -> Self {
        let max_file_size_bytes = match folder {
            AssetFolder::Hero => 10 * MIB,
            AssetFolder::Profile | AssetFolder::Gallery => 5 * MIB,
        };
        Self {
            max_file_size_bytes,
        }
    }

    pub fn check_content_type(&self, content_type: &str) -> Result<(), UploadPolicyError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.strip_prefix("image/") {
            Some(subtype) if !subtype.is_empty() => Ok(()),
            _ => Err(UploadPolicyError::NotAnImage),
        }
    }

    pub fn check_size(&self, len: usize) -> Result<(), UploadPolicyError> {
        if len > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                max_mib: self.max_file_size_bytes / MIB,
            });
        }
        Ok(())
    }

    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadPolicyError> {
        self.check_content_type(&upload.content_type)?;
        if upload.bytes.is_empty() {
            return Err(UploadPolicyError::Empty);
        }
        self.check_size(upload.bytes.len())
    }
}
