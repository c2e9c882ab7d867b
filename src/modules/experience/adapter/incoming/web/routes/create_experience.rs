use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::experience_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::experience::application::ports::incoming::use_cases::CreateExperienceCommand;
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    #[schema(value_type = Object, example = json!("Desert guide"))]
    pub name: Option<TranslatableText>,
    #[schema(example = "2019 - 2021")]
    pub date: Option<String>,
    #[serde(default)]
    pub in_progress: bool,
    pub order: Option<i32>,
}

/// Add an experience entry
#[utoipa::path(
    post,
    path = "/api/experience",
    tag = "experience",
    request_body = CreateExperienceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<ExperienceItem>)),
        (status = 400, description = "Name missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/experience")]
pub async fn create_experience_handler(
    _admin: AuthenticatedAdmin,
    payload: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let Some(name) = payload.name else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Name is required");
    };

    let command = CreateExperienceCommand {
        name,
        date: payload.date,
        in_progress: payload.in_progress,
        order: payload.order.unwrap_or(0),
    };

    match data.experience.create.execute(command).await {
        Ok(item) => ApiResponse::created("Experience created", item),
        Err(e) => experience_error_response(e),
    }
}
