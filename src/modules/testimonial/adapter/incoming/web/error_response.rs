use actix_web::HttpResponse;
use tracing::error;

use crate::modules::testimonial::application::ports::incoming::use_cases::TestimonialError;
use crate::shared::api::ApiResponse;

pub(crate) fn testimonial_error_response(e: TestimonialError) -> HttpResponse {
    match e {
        TestimonialError::NameRequired
        | TestimonialError::NameTooLong(_)
        | TestimonialError::CommentRequired => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        TestimonialError::NotFound => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
        }
        TestimonialError::RepositoryError(_) => {
            error!(error = %e, "Testimonial request failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
