use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, PasswordHasher,
};
use crate::auth::domain::admin::normalize_email;
use crate::shared::config::{required, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedAdminError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

impl AdminSeed {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            email: required("ADMIN_EMAIL")?,
            password: required("ADMIN_PASSWORD")?,
        })
    }
}

/// Creates the first admin account at startup when none exists yet.
pub struct SeedAdminUseCase {
    repository: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl SeedAdminUseCase {
    pub fn new(
        repository: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    pub async fn execute(&self, seed: &AdminSeed) -> Result<SeedOutcome, SeedAdminError> {
        let exists = self
            .repository
            .any_exists()
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        if exists {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        match self
            .repository
            .create(&normalize_email(&seed.email), &password_hash)
            .await
        {
            Ok(_) => Ok(SeedOutcome::Created),
            // Another instance seeded first
            Err(AdminRepositoryError::EmailAlreadyExists) => Ok(SeedOutcome::AlreadyPresent),
            Err(e) => Err(SeedAdminError::RepositoryError(e.to_string())),
        }
    }
}
