mod change_password;
mod forgot_password;
mod login;
mod reset_password;

pub use change_password::{change_password_handler, ChangePasswordRequestDto};
pub use forgot_password::{forgot_password_handler, ForgotPasswordRequestDto};
pub use login::{login_handler, LoginRequestDto, LoginResponse};
pub use reset_password::{reset_password_handler, ResetPasswordRequestDto};

pub use change_password::__path_change_password_handler;
pub use forgot_password::__path_forgot_password_handler;
pub use login::__path_login_handler;
pub use reset_password::__path_reset_password_handler;
