use crate::modules::gallery::application::ports::outgoing::GalleryRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("Caption must be at most {0} characters")]
    CaptionTooLong(usize),

    #[error("Image not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GalleryRepositoryError> for GalleryError {
    fn from(e: GalleryRepositoryError) -> Self {
        match e {
            GalleryRepositoryError::NotFound => GalleryError::NotFound,
            GalleryRepositoryError::DatabaseError(msg) => GalleryError::RepositoryError(msg),
        }
    }
}
