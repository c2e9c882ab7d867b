use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::testimonial_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::testimonial::application::ports::incoming::use_cases::UpdateTestimonialCommand;
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub comment: Option<TranslatableText>,
    /// `null` or `""` removes the package
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub activity_package: PatchField<TranslatableText>,
    pub order: Option<i32>,
}

/// Edit a testimonial
#[utoipa::path(
    put,
    path = "/api/testimonial/{id}",
    tag = "testimonial",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    request_body = UpdateTestimonialRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Testimonial updated", body = inline(SuccessResponse<TestimonialItem>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/testimonial/{id}")]
pub async fn update_testimonial_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = UpdateTestimonialCommand {
        name: payload.name,
        comment: payload.comment,
        activity_package: payload.activity_package,
        order: payload.order,
    };

    match data
        .testimonial
        .update
        .execute(path.into_inner(), command)
        .await
    {
        Ok(item) => ApiResponse::success("Testimonial updated", item),
        Err(e) => testimonial_error_response(e),
    }
}
