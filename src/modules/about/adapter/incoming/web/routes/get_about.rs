use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::about::domain::AboutSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public about section
///
/// The section is created with its default content on first read.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses(
        (status = 200, description = "About section", body = inline(SuccessResponse<AboutSection>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get.execute().await {
        Ok(section) => ApiResponse::success("About section retrieved", section),
        Err(e) => {
            error!(error = %e, "Failed to load about section");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
