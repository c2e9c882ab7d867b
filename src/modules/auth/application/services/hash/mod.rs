pub mod reset_token;
pub mod token_hasher;

pub use reset_token::generate_reset_token;
pub use token_hasher::hash_token;
