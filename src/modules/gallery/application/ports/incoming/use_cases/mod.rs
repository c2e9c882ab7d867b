mod delete_gallery_image;
mod gallery_error;
mod get_gallery;
mod update_gallery_image;
mod upload_gallery_image;

pub use delete_gallery_image::DeleteGalleryImageUseCase;
pub use gallery_error::GalleryError;
pub use get_gallery::GetGalleryUseCase;
pub use update_gallery_image::{UpdateGalleryImageCommand, UpdateGalleryImageUseCase};
pub use upload_gallery_image::{UploadGalleryImageCommand, UploadGalleryImageUseCase};
