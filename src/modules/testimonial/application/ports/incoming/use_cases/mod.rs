mod create_testimonial;
mod delete_testimonial;
mod get_testimonials;
mod testimonial_error;
mod update_testimonial;

pub use create_testimonial::{CreateTestimonialCommand, CreateTestimonialUseCase};
pub use delete_testimonial::DeleteTestimonialUseCase;
pub use get_testimonials::GetTestimonialsUseCase;
pub use testimonial_error::TestimonialError;
pub use update_testimonial::{UpdateTestimonialCommand, UpdateTestimonialUseCase};
