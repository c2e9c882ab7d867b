use actix_web::{get, web, Responder};

use super::super::journey_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::journey::domain::JourneyItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public journey timeline, oldest milestone first within the same order
#[utoipa::path(
    get,
    path = "/api/journey",
    tag = "journey",
    responses(
        (status = 200, description = "Journey items", body = inline(SuccessResponse<Vec<JourneyItem>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/journey")]
pub async fn get_journey_handler(data: web::Data<AppState>) -> impl Responder {
    match data.journey.list.execute().await {
        Ok(items) => ApiResponse::success("Journey items retrieved", items),
        Err(e) => journey_error_response(e),
    }
}
