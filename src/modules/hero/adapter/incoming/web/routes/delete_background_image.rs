use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::hero::application::ports::incoming::use_cases::BackgroundImageError;
use crate::modules::hero::domain::HeroSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove the hero background image
#[utoipa::path(
    delete,
    path = "/api/hero/background-image",
    tag = "hero",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Background deleted", body = inline(SuccessResponse<HeroSection>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No background recorded", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/hero/background-image")]
pub async fn delete_background_image_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hero.delete_image.execute().await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "Hero background deleted");
            ApiResponse::success("Hero background image deleted", section)
        }
        Err(BackgroundImageError::NoBackgroundImage) => {
            ApiResponse::not_found("IMAGE_NOT_FOUND", "No background image found")
        }
        Err(e) => {
            error!(error = %e, "Hero background deletion failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
