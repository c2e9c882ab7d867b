use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::gallery_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::gallery::application::ports::incoming::use_cases::UpdateGalleryImageCommand;
use crate::modules::gallery::domain::GalleryImage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGalleryImageRequest {
    #[schema(example = "Sunset over the dunes")]
    pub caption: Option<String>,
    pub order: Option<i32>,
}

/// Edit a gallery image's caption or position
#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    tag = "gallery",
    params(("id" = Uuid, Path, description = "Gallery image id")),
    request_body = UpdateGalleryImageRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Image info updated", body = inline(SuccessResponse<GalleryImage>)),
        (status = 400, description = "Invalid field", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/gallery/{id}")]
pub async fn update_gallery_image_handler(
    _admin: AuthenticatedAdmin,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateGalleryImageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = UpdateGalleryImageCommand {
        caption: payload.caption,
        order: payload.order,
    };

    match data.gallery.update.execute(path.into_inner(), command).await {
        Ok(image) => ApiResponse::success("Image info updated", image),
        Err(e) => gallery_error_response(e),
    }
}
