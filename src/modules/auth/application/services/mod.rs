pub mod hash;
pub mod password;
