pub mod contact_use_cases;
pub mod ports;
pub mod service;

pub use contact_use_cases::ContactUseCases;
