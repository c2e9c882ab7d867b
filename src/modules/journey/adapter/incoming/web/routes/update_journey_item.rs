use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::journey_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::journey::application::ports::incoming::use_cases::UpdateJourneyItemCommand;
use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateJourneyItemRequest {
    pub age: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub title: Option<TranslatableText>,
    #[schema(value_type = Option<Object>)]
    pub body: Option<TranslatableText>,
    pub order: Option<i32>,
}

/// Edit a journey milestone
#[utoipa::path(
    put,
    path = "/api/journey/{id}",
    tag = "journey",
    params(("id" = Uuid, Path, description = "Journey item id")),
    request_body = UpdateJourneyItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Journey item updated", body = inline(SuccessResponse<JourneyItem>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Journey item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/journey/{id}")]
pub async fn update_journey_item_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateJourneyItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = UpdateJourneyItemCommand {
        age: payload.age,
        title: payload.title,
        body: payload.body,
        order: payload.order,
    };

    match data.journey.update.execute(path.into_inner(), command).await {
        Ok(item) => ApiResponse::success("Journey item updated", item),
        Err(e) => journey_error_response(e),
    }
}
