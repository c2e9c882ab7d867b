mod error_response;
pub mod routes;

pub(crate) use error_response::gallery_error_response;
