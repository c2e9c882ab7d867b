use async_trait::async_trait;

use crate::modules::gallery::application::ports::{
    incoming::use_cases::{GalleryError, GetGalleryUseCase},
    outgoing::GalleryRepository,
};
use crate::modules::gallery::domain::GalleryImage;

pub struct GetGalleryService<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> GetGalleryService<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetGalleryUseCase for GetGalleryService<R>
where
    R: GalleryRepository,
{
    async fn execute(&self) -> Result<Vec<GalleryImage>, GalleryError> {
        Ok(self.repository.list().await?)
    }
}
