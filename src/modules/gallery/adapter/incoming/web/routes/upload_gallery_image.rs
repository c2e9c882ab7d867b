use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::super::gallery_error_response;
use crate::api::schemas::{ErrorResponse, GalleryUploadForm, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::gallery::application::ports::incoming::use_cases::{
    GalleryError, UploadGalleryImageCommand,
};
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::media::adapter::incoming::web::{image_form_error_response, read_image_form};
use crate::modules::media::domain::{AssetFolder, UploadPolicy};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upload a gallery image
///
/// Multipart fields: `image` (required, at most 5 MB), `caption` and `order`.
#[utoipa::path(
    post,
    path = "/api/gallery",
    tag = "gallery",
    request_body(content = GalleryUploadForm, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Image uploaded", body = inline(SuccessResponse<GalleryImage>)),
        (status = 400, description = "Missing, oversized or non-image file, or bad order", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse),
    )
)]
#[post("/api/gallery")]
pub async fn upload_gallery_image_handler(
    admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = UploadPolicy::for_folder(AssetFolder::Gallery);
    let form = match read_image_form(payload, &policy).await {
        Ok(form) => form,
        Err(e) => return image_form_error_response(e),
    };

    let order = match form.text("order").map(str::trim).filter(|s| !s.is_empty()) {
        None => 0,
        Some(raw) => match raw.parse::<i32>() {
            Ok(order) => order,
            Err(_) => {
                return ApiResponse::bad_request("VALIDATION_ERROR", "Order must be an integer")
            }
        },
    };
    let caption = form.text("caption").unwrap_or_default().to_string();

    let command = UploadGalleryImageCommand {
        image: form.image,
        caption,
        order,
    };

    match data.gallery.upload.execute(command).await {
        Ok(image) => {
            info!(admin_id = %admin.admin_id, image_id = %image.id, "Gallery image uploaded");
            ApiResponse::created("Image uploaded", image)
        }
        Err(e @ GalleryError::CaptionTooLong(_)) => gallery_error_response(e),
        Err(e) => {
            error!(error = %e, "Gallery upload failed");
            ApiResponse::internal_error("Upload failed", &e.to_string())
        }
    }
}
