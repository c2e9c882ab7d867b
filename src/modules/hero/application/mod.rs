pub mod hero_use_cases;
pub mod ports;
pub mod service;

pub use hero_use_cases::HeroUseCases;
