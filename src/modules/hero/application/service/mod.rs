mod background_image_service;
mod hero_service;

pub use background_image_service::BackgroundImageService;
pub use hero_service::HeroService;
