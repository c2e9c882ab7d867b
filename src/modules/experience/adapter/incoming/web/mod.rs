mod error_response;
pub mod routes;

pub(crate) use error_response::experience_error_response;
