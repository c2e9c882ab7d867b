pub mod gallery_repository;

pub use gallery_repository::{
    GalleryChanges, GalleryRepository, GalleryRepositoryError, NewGalleryImage,
};
