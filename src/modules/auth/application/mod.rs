pub mod auth_use_cases;
pub mod ports;
pub mod services;
pub mod use_cases;

pub use auth_use_cases::AuthUseCases;
