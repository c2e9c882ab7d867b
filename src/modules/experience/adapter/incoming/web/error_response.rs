use actix_web::HttpResponse;
use tracing::error;

use crate::modules::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::api::ApiResponse;

pub(crate) fn experience_error_response(e: ExperienceError) -> HttpResponse {
    match e {
        ExperienceError::NameRequired | ExperienceError::DateTooLong(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ExperienceError::NotFound => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }
        ExperienceError::RepositoryError(_) => {
            error!(error = %e, "Experience request failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
