use actix_web::HttpResponse;
use tracing::warn;

use super::multipart::ImageFormError;
use crate::modules::media::domain::UploadPolicyError;
use crate::shared::api::ApiResponse;

/// Every multipart problem is the client's: answer 400 before any remote call.
pub fn image_form_error_response(err: ImageFormError) -> HttpResponse {
    warn!(error = %err, "Rejected image upload");

    let code = match &err {
        ImageFormError::Malformed(_) => "INVALID_MULTIPART",
        ImageFormError::MissingImage => "NO_IMAGE",
        ImageFormError::Policy(UploadPolicyError::NotAnImage) => "INVALID_FILE_TYPE",
        ImageFormError::Policy(UploadPolicyError::TooLarge { .. }) => "FILE_TOO_LARGE",
        ImageFormError::Policy(UploadPolicyError::Empty) => "EMPTY_FILE",
    };

    ApiResponse::bad_request(code, &err.to_string())
}
