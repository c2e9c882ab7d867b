pub mod testimonial_repository;

pub use testimonial_repository::{
    NewTestimonial, TestimonialChanges, TestimonialRepository, TestimonialRepositoryError,
};
