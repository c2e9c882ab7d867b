pub mod ports;
pub mod service;
pub mod testimonial_use_cases;

pub use testimonial_use_cases::TestimonialUseCases;
