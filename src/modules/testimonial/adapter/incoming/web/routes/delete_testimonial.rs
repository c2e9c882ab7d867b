use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::super::testimonial_error_response;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/api/testimonial/{id}",
    tag = "testimonial",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Testimonial deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/testimonial/{id}")]
pub async fn delete_testimonial_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.testimonial.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("Testimonial deleted"),
        Err(e) => testimonial_error_response(e),
    }
}
