mod delete_gallery_image_service;
mod get_gallery_service;
mod update_gallery_image_service;
mod upload_gallery_image_service;

pub use delete_gallery_image_service::DeleteGalleryImageService;
pub use get_gallery_service::GetGalleryService;
pub use update_gallery_image_service::UpdateGalleryImageService;
pub use upload_gallery_image_service::UploadGalleryImageService;

use crate::modules::gallery::application::ports::incoming::use_cases::GalleryError;

const MAX_CAPTION_LEN: usize = 500;

fn normalize_caption(caption: String) -> Result<String, GalleryError> {
    let caption = caption.trim().to_string();
    if caption.chars().count() > MAX_CAPTION_LEN {
        return Err(GalleryError::CaptionTooLong(MAX_CAPTION_LEN));
    }
    Ok(caption)
}
