use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::super::testimonial_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::testimonial::application::ports::incoming::use_cases::CreateTestimonialCommand;
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    #[schema(example = "Jane")]
    pub name: Option<String>,
    #[schema(value_type = Object, example = json!("Great trip!"))]
    pub comment: Option<TranslatableText>,
    #[schema(value_type = Option<Object>, example = json!("Desert safari"))]
    pub activity_package: Option<TranslatableText>,
    pub order: Option<i32>,
}

/// Add a testimonial
#[utoipa::path(
    post,
    path = "/api/testimonial",
    tag = "testimonial",
    request_body = CreateTestimonialRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Testimonial created", body = inline(SuccessResponse<TestimonialItem>)),
        (status = 400, description = "Name or comment missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/testimonial")]
pub async fn create_testimonial_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<CreateTestimonialRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let Some(name) = payload.name else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Name is required");
    };
    let Some(comment) = payload.comment else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Comment is required");
    };

    let command = CreateTestimonialCommand {
        name,
        comment,
        activity_package: payload.activity_package,
        order: payload.order.unwrap_or(0),
    };

    match data.testimonial.create.execute(command).await {
        Ok(item) => {
            info!(admin_id = %admin.admin_id, testimonial_id = %item.id, "Testimonial added");
            ApiResponse::created("Testimonial created", item)
        }
        Err(e) => testimonial_error_response(e),
    }
}
