mod delete_background_image;
mod get_hero;
mod update_hero;
mod upload_background_image;

pub use delete_background_image::delete_background_image_handler;
pub use get_hero::get_hero_handler;
pub use update_hero::{update_hero_handler, UpdateHeroRequest};
pub use upload_background_image::upload_background_image_handler;

pub use delete_background_image::__path_delete_background_image_handler;
pub use get_hero::__path_get_hero_handler;
pub use update_hero::__path_update_hero_handler;
pub use upload_background_image::__path_upload_background_image_handler;
