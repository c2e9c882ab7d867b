use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::experience_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::experience::application::ports::incoming::use_cases::UpdateExperienceCommand;
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    #[schema(value_type = Option<Object>)]
    pub name: Option<TranslatableText>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub date: PatchField<String>,
    pub in_progress: Option<bool>,
    pub order: Option<i32>,
}

impl From<UpdateExperienceRequest> for UpdateExperienceCommand {
    fn from(req: UpdateExperienceRequest) -> Self {
        UpdateExperienceCommand {
            name: req.name,
            date: req.date,
            in_progress: req.in_progress,
            order: req.order,
        }
    }
}

/// Edit an experience entry
#[utoipa::path(
    put,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = UpdateExperienceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<ExperienceItem>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/experience/{id}")]
pub async fn update_experience_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .experience
        .update
        .execute(id, payload.into_inner().into())
        .await
    {
        Ok(item) => ApiResponse::success("Experience updated", item),
        Err(e) => experience_error_response(e),
    }
}
