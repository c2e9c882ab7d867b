use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 128;

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let len = password.chars().count();

        if len < MIN_LEN {
            return Err(PasswordPolicyError::TooShort(MIN_LEN));
        }

        if len > MAX_LEN {
            return Err(PasswordPolicyError::TooLong(MAX_LEN));
        }

        Ok(())
    }
}
