pub mod experience_repository;

pub use experience_repository::{
    ExperienceChanges, ExperienceRepository, ExperienceRepositoryError, NewExperience,
};
