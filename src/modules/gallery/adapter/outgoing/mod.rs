pub mod gallery_repository_postgres;
pub mod sea_orm_entity;

pub use gallery_repository_postgres::GalleryRepositoryPostgres;
