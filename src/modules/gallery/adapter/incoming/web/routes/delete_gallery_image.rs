use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::super::gallery_error_response;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a gallery image and its hosted file
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    tag = "gallery",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/gallery/{id}")]
pub async fn delete_gallery_image_handler(
    admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match data.gallery.delete.execute(id).await {
        Ok(()) => {
            info!(admin_id = %admin.admin_id, image_id = %id, "Gallery image removed");
            ApiResponse::ok("Image deleted")
        }
        Err(e) => gallery_error_response(e),
    }
}
