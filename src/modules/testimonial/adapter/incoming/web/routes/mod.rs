mod create_testimonial;
mod delete_testimonial;
mod get_testimonials;
mod update_testimonial;

pub use create_testimonial::{create_testimonial_handler, CreateTestimonialRequest};
pub use delete_testimonial::delete_testimonial_handler;
pub use get_testimonials::get_testimonials_handler;
pub use update_testimonial::{update_testimonial_handler, UpdateTestimonialRequest};

pub use create_testimonial::__path_create_testimonial_handler;
pub use delete_testimonial::__path_delete_testimonial_handler;
pub use get_testimonials::__path_get_testimonials_handler;
pub use update_testimonial::__path_update_testimonial_handler;
