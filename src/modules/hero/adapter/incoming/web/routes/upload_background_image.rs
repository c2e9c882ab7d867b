use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, ImageUploadForm, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::hero::domain::HeroSection;
use crate::modules::media::adapter::incoming::web::{image_form_error_response, read_image_form};
use crate::modules::media::domain::{AssetFolder, UploadPolicy};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upload the hero background image
///
/// Images only, at most 10 MB. Replaces the current background.
#[utoipa::path(
    post,
    path = "/api/hero/background-image",
    tag = "hero",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Background uploaded", body = inline(SuccessResponse<HeroSection>)),
        (status = 400, description = "Missing, oversized or non-image file", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse),
    )
)]
#[post("/api/hero/background-image")]
pub async fn upload_background_image_handler(
    admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = UploadPolicy::for_folder(AssetFolder::Hero);
    let form = match read_image_form(payload, &policy).await {
        Ok(form) => form,
        Err(e) => return image_form_error_response(e),
    };

    match data.hero.upload_image.execute(form.image).await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "Hero background uploaded");
            ApiResponse::success("Hero background image uploaded", section)
        }
        Err(e) => {
            error!(error = %e, "Hero background upload failed");
            ApiResponse::internal_error("Upload failed", &e.to_string())
        }
    }
}
