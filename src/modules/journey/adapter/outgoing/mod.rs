pub mod journey_repository_postgres;
pub mod sea_orm_entity;

pub use journey_repository_postgres::JourneyRepositoryPostgres;
