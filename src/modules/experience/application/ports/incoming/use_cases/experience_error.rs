use crate::modules::experience::application::ports::outgoing::ExperienceRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceError {
    #[error("Name is required")]
    NameRequired,

    #[error("Date must be at most {0} characters")]
    DateTooLong(usize),

    #[error("Experience not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(e: ExperienceRepositoryError) -> Self {
        match e {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => ExperienceError::RepositoryError(msg),
        }
    }
}
