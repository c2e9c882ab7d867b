use actix_web::{get, web, Responder};

use super::super::experience_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::experience::domain::ExperienceItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public experience list, ordered by `order` then newest first
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "Experience list", body = inline(SuccessResponse<Vec<ExperienceItem>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(items) => ApiResponse::success("Experiences retrieved", items),
        Err(e) => experience_error_response(e),
    }
}
