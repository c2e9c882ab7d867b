use actix_web::HttpResponse;
use tracing::error;

use crate::modules::gallery::application::ports::incoming::use_cases::GalleryError;
use crate::shared::api::ApiResponse;

pub(crate) fn gallery_error_response(e: GalleryError) -> HttpResponse {
    match e {
        GalleryError::CaptionTooLong(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        GalleryError::NotFound => ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found"),
        GalleryError::StorageError(_) | GalleryError::RepositoryError(_) => {
            error!(error = %e, "Gallery request failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
