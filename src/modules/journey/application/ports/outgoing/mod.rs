pub mod journey_repository;

pub use journey_repository::{
    JourneyChanges, JourneyRepository, JourneyRepositoryError, NewJourneyItem,
};
