use actix_web::HttpResponse;
use tracing::error;

use crate::modules::journey::application::ports::incoming::use_cases::JourneyError;
use crate::shared::api::ApiResponse;

pub(crate) fn journey_error_response(e: JourneyError) -> HttpResponse {
    match e {
        JourneyError::FieldRequired(_) | JourneyError::AgeTooLong(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        JourneyError::NotFound => {
            ApiResponse::not_found("JOURNEY_NOT_FOUND", "Journey item not found")
        }
        JourneyError::RepositoryError(_) => {
            error!(error = %e, "Journey request failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
