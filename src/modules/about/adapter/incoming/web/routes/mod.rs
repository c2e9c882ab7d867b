mod delete_profile_image;
mod get_about;
mod update_about;
mod upload_profile_image;

pub use delete_profile_image::delete_profile_image_handler;
pub use get_about::get_about_handler;
pub use update_about::{update_about_handler, UpdateAboutRequest};
pub use upload_profile_image::upload_profile_image_handler;

pub use delete_profile_image::__path_delete_profile_image_handler;
pub use get_about::__path_get_about_handler;
pub use update_about::__path_update_about_handler;
pub use upload_profile_image::__path_upload_profile_image_handler;
