use async_trait::async_trait;

use super::argon2_hasher::Argon2Hasher;
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Argon2id for everything new; still accepts bcrypt hashes
/// (`$2a$`, `$2b$`, `$2y$`) carried over from earlier deployments.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    argon2: Argon2Hasher,
}

impl LegacyAwareHasher {
    pub fn new(argon2: Argon2Hasher) -> Self {
        Self { argon2 }
    }

    fn is_bcrypt(hash: &str) -> bool {
        hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$")
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.argon2.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if !Self::is_bcrypt(hash) {
            return self.argon2.verify_password(password, hash).await;
        }

        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &hash).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
