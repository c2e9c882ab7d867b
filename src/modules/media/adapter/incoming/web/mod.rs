pub mod error_response;
pub mod multipart;

pub use error_response::image_form_error_response;
pub use multipart::{read_image_form, ImageForm, ImageFormError};
