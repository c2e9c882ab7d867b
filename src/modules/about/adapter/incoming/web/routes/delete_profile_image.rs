use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::about::application::ports::incoming::use_cases::ProfileImageError;
use crate::modules::about::domain::AboutSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove the profile image
#[utoipa::path(
    delete,
    path = "/api/about/profile-image",
    tag = "about",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile image deleted", body = inline(SuccessResponse<AboutSection>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No profile image recorded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/about/profile-image")]
pub async fn delete_profile_image_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.delete_image.execute().await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "Profile image deleted");
            ApiResponse::success("Profile image deleted", section)
        }
        Err(ProfileImageError::NoProfileImage) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "No profile image found")
        }
        Err(e) => {
            error!(error = %e, "Profile image deletion failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
