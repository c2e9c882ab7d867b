mod error_response;
pub mod routes;

pub(crate) use error_response::journey_error_response;
