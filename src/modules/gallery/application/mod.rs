pub mod gallery_use_cases;
pub mod ports;
pub mod service;

pub use gallery_use_cases::GalleryUseCases;
