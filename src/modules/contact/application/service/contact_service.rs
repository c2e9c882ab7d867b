use async_trait::async_trait;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{
        ContactError, GetContactUseCase, UpdateContactCommand, UpdateContactUseCase,
    },
    outgoing::{ContactRepository, ContactRepositoryError},
};
use crate::modules::contact::domain::ContactInfo;

#[derive(Clone)]
pub struct ContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn load_or_create(&self) -> Result<ContactInfo, ContactRepositoryError> {
        match self.repository.find().await? {
            Some(info) => Ok(info),
            None => self.repository.insert_if_absent().await,
        }
    }
}

fn repo_err(e: ContactRepositoryError) -> ContactError {
    ContactError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> GetContactUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self) -> Result<ContactInfo, ContactError> {
        self.load_or_create().await.map_err(repo_err)
    }
}

#[async_trait]
impl<R> UpdateContactUseCase for ContactService<R>
where
    R: ContactRepository,
{
    async fn execute(&self, command: UpdateContactCommand) -> Result<ContactInfo, ContactError> {
        let current = self.load_or_create().await.map_err(repo_err)?;
        if command.is_empty() {
            return Ok(current);
        }

        self.repository.update(command).await.map_err(repo_err)
    }
}
