use actix_multipart::Multipart;
use futures::StreamExt;
use std::collections::HashMap;

use crate::modules::media::domain::{ImageUpload, UploadPolicy, UploadPolicyError};

const IMAGE_FIELD: &str = "image";
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("No image file provided")]
    MissingImage,

    #[error(transparent)]
    Policy(#[from] UploadPolicyError),
}

/// The `image` part of a form plus any plain text fields sent with it.
#[derive(Debug)]
pub struct ImageForm {
    pub image: ImageUpload,
    pub fields: HashMap<String, String>,
}

impl ImageForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Reads a multipart form, checking the image against `policy` while it
/// streams so oversized or non-image uploads are dropped early.
pub async fn read_image_form(
    mut payload: Multipart,
    policy: &UploadPolicy,
) -> Result<ImageForm, ImageFormError> {
    let mut image: Option<ImageUpload> = None;
    let mut fields = HashMap::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ImageFormError::Malformed(e.to_string()))?;
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let content_type = field
                .content_type()
                .map(|mime| mime.essence_str().to_string())
                .unwrap_or_default();
            policy.check_content_type(&content_type)?;

            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .unwrap_or("upload")
                .to_string();

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| ImageFormError::Malformed(e.to_string()))?;
                policy.check_size(bytes.len() + chunk.len())?;
                bytes.extend_from_slice(&chunk);
            }

            image = Some(ImageUpload {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| ImageFormError::Malformed(e.to_string()))?;
                if bytes.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
                    return Err(ImageFormError::Malformed(format!(
                        "field '{}' is too long",
                        name
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }
            let value = String::from_utf8(bytes)
                .map_err(|_| ImageFormError::Malformed(format!("field '{}' is not UTF-8", name)))?;
            fields.insert(name, value);
        }
    }

    let image = image.ok_or(ImageFormError::MissingImage)?;
    if image.bytes.is_empty() {
        return Err(UploadPolicyError::Empty.into());
    }

    Ok(ImageForm { image, fields })
}
