use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, ImageUploadForm, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::about::domain::AboutSection;
use crate::modules::media::adapter::incoming::web::{image_form_error_response, read_image_form};
use crate::modules::media::domain::{AssetFolder, UploadPolicy};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Upload the profile image
///
/// Replaces any existing image; the previous asset is removed from the
/// image host first. Images only, at most 5 MB.
#[utoipa::path(
    post,
    path = "/api/about/profile-image",
    tag = "about",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile image uploaded", body = inline(SuccessResponse<AboutSection>)),
        (status = 400, description = "Missing, oversized or non-image file", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Upload failed", body = ErrorResponse),
    )
)]
#[post("/api/about/profile-image")]
pub async fn upload_profile_image_handler(
    admin: AuthenticatedAdmin,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = UploadPolicy::for_folder(AssetFolder::Profile);
    let form = match read_image_form(payload, &policy).await {
        Ok(form) => form,
        Err(e) => return image_form_error_response(e),
    };

    match data.about.upload_image.execute(form.image).await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "Profile image uploaded");
            ApiResponse::success("Profile image uploaded", section)
        }
        Err(e) => {
            error!(error = %e, "Profile image upload failed");
            ApiResponse::internal_error("Upload failed", &e.to_string())
        }
    }
}
