pub mod change_password;
pub mod forgot_password;
pub mod login_admin;
pub mod reset_password;
pub mod seed_admin;
