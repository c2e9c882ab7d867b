use actix_web::{get, web, Responder};

use super::super::gallery_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::gallery::domain::GalleryImage;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public gallery
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Gallery images", body = inline(SuccessResponse<Vec<GalleryImage>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/gallery")]
pub async fn get_gallery_handler(data: web::Data<AppState>) -> impl Responder {
    match data.gallery.list.execute().await {
        Ok(images) => ApiResponse::success("Gallery images retrieved", images),
        Err(e) => gallery_error_response(e),
    }
}
