use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::super::experience_error_response;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an experience entry
#[utoipa::path(
    delete,
    path = "/api/experience/{id}",
    tag = "experience",
    params(("id" = Uuid, Path, description = "Experience id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Experience deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Experience not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/experience/{id}")]
pub async fn delete_experience_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("Experience deleted"),
        Err(e) => experience_error_response(e),
    }
}
