use crate::modules::testimonial::application::ports::outgoing::TestimonialRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestimonialError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at most {0} characters")]
    NameTooLong(usize),

    #[error("Comment is required")]
    CommentRequired,

    #[error("Testimonial not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TestimonialRepositoryError> for TestimonialError {
    fn from(e: TestimonialRepositoryError) -> Self {
        match e {
            TestimonialRepositoryError::NotFound => TestimonialError::NotFound,
            TestimonialRepositoryError::DatabaseError(msg) => {
                TestimonialError::RepositoryError(msg)
            }
        }
    }
}
