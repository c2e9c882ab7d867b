pub mod journey_use_cases;
pub mod ports;
pub mod service;

pub use journey_use_cases::JourneyUseCases;
