mod delete_gallery_image;
mod get_gallery;
mod update_gallery_image;
mod upload_gallery_image;

pub use delete_gallery_image::delete_gallery_image_handler;
pub use get_gallery::get_gallery_handler;
pub use update_gallery_image::{update_gallery_image_handler, UpdateGalleryImageRequest};
pub use upload_gallery_image::upload_gallery_image_handler;

pub use delete_gallery_image::__path_delete_gallery_image_handler;
pub use get_gallery::__path_get_gallery_handler;
pub use update_gallery_image::__path_update_gallery_image_handler;
pub use upload_gallery_image::__path_upload_gallery_image_handler;
