use rand_core::{OsRng, RngCore};

const RESET_TOKEN_BYTES: usize = 32;

/// 32 random bytes, hex encoded (64 characters).
pub fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
