mod about_service;
mod profile_image_service;

pub use about_service::AboutService;
pub use profile_image_service::ProfileImageService;
