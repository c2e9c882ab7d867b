#![cfg(test)]

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, HashError, PasswordHasher, TokenClaims, TokenError,
    TokenProvider,
};
use crate::auth::domain::Admin;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "portfolio-cms".to_string(),
        access_token_expiry: 3600,
    })
}

/// App data the `AuthenticatedAdmin` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for a freshly minted admin token.
pub fn bearer_for(admin_id: Uuid) -> String {
    let token = test_jwt_service()
        .generate_access_token(admin_id)
        .expect("token generation");
    format!("Bearer {}", token)
}

/// Hashes by prefixing, so tests can assert on stored values.
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

pub struct StaticTokenProvider;

impl TokenProvider for StaticTokenProvider {
    fn generate_access_token(&self, admin_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("token-for-{}", admin_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::MalformedToken)
    }
}

#[derive(Clone)]
struct StoredAdmin {
    admin: Admin,
    reset_token: Option<(String, DateTime<Utc>)>,
}

#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<HashMap<Uuid, StoredAdmin>>,
}

impl InMemoryAdminRepository {
    pub fn insert(&self, admin: Admin) {
        self.admins.lock().unwrap().insert(
            admin.id,
            StoredAdmin {
                admin,
                reset_token: None,
            },
        );
    }

    pub fn reset_token_of(&self, id: Uuid) -> Option<(String, DateTime<Utc>)> {
        self.admins
            .lock()
            .unwrap()
            .get(&id)
            .and_then(|stored| stored.reset_token.clone())
    }

    pub fn set_reset_token(&self, id: Uuid, token_hash: &str, expires_at: DateTime<Utc>) {
        if let Some(stored) = self.admins.lock().unwrap().get_mut(&id) {
            stored.reset_token = Some((token_hash.to_string(), expires_at));
        }
    }

    pub fn password_hash_of(&self, id: Uuid) -> Option<String> {
        self.admins
            .lock()
            .unwrap()
            .get(&id)
            .map(|stored| stored.admin.password_hash.clone())
    }

    pub fn count(&self) -> usize {
        self.admins.lock().unwrap().len()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        let email = email.to_lowercase();
        Ok(self
            .admins
            .lock()
            .unwrap()
            .values()
            .find(|stored| stored.admin.email == email)
            .map(|stored| stored.admin.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .get(&id)
            .map(|stored| stored.admin.clone()))
    }

    async fn any_exists(&self) -> Result<bool, AdminRepositoryError> {
        Ok(!self.admins.lock().unwrap().is_empty())
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, AdminRepositoryError> {
        let mut admins = self.admins.lock().unwrap();
        let email = email.to_lowercase();
        if admins.values().any(|stored| stored.admin.email == email) {
            return Err(AdminRepositoryError::EmailAlreadyExists);
        }

        let admin = Admin {
            id: Uuid::new_v4(),
            email,
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        admins.insert(
            admin.id,
            StoredAdmin {
                admin: admin.clone(),
                reset_token: None,
            },
        );
        Ok(admin)
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AdminRepositoryError> {
        let mut admins = self.admins.lock().unwrap();
        let stored = admins.get_mut(&id).ok_or(AdminRepositoryError::NotFound)?;
        stored.admin.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn store_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AdminRepositoryError> {
        let mut admins = self.admins.lock().unwrap();
        let stored = admins.get_mut(&id).ok_or(AdminRepositoryError::NotFound)?;
        stored.reset_token = Some((token_hash.to_string(), expires_at));
        Ok(())
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .values()
            .find(|stored| {
                matches!(&stored.reset_token, Some((hash, expires)) if hash == token_hash && *expires > now)
            })
            .map(|stored| stored.admin.clone()))
    }

    async fn redeem_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        new_password_hash: &str,
    ) -> Result<bool, AdminRepositoryError> {
        let mut admins = self.admins.lock().unwrap();
        let Some(stored) = admins.get_mut(&id) else {
            return Ok(false);
        };

        let valid = matches!(&stored.reset_token, Some((hash, expires)) if hash == token_hash && *expires > now);
        if !valid {
            return Ok(false);
        }

        stored.admin.password_hash = new_password_hash.to_string();
        stored.reset_token = None;
        Ok(true)
    }
}

/// Repository holding one admin whose password hashes as `hashed:{password}`.
pub fn seeded_repository(email: &str, password: &str) -> (Arc<InMemoryAdminRepository>, Admin) {
    let repo = Arc::new(InMemoryAdminRepository::default());
    let admin = Admin {
        id: Uuid::new_v4(),
        email: email.to_lowercase(),
        password_hash: format!("hashed:{}", password),
        created_at: Utc::now(),
    };
    repo.insert(admin.clone());
    (repo, admin)
}
