pub mod password_reset_email;

pub use password_reset_email::PasswordResetEmailService;
