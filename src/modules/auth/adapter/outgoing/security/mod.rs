pub mod argon2_hasher;
pub mod legacy_aware_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use legacy_aware_hasher::LegacyAwareHasher;
