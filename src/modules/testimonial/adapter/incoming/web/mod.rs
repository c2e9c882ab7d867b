mod error_response;
pub mod routes;

pub(crate) use error_response::testimonial_error_response;
