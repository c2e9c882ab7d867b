use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::super::journey_error_response;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a journey milestone
#[utoipa::path(
    delete,
    path = "/api/journey/{id}",
    tag = "journey",
    params(("id" = Uuid, Path, description = "Journey item id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Journey item deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Journey item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/journey/{id}")]
pub async fn delete_journey_item_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.journey.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::ok("Journey item deleted"),
        Err(e) => journey_error_response(e),
    }
}
