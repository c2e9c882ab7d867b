use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::use_cases::reset_password::ResetPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequestDto {
    /// Raw token from the reset link
    pub token: String,

    #[schema(example = "NewSecurePass123!")]
    pub new_password: String,
}

/// Reset password with an emailed token
///
/// The token is single use and valid for one hour.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordRequestDto,
    responses(
        (status = 200, description = "Password reset successful", body = MessageResponse),
        (status = 400, description = "Invalid or expired token, or weak password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .auth
        .reset_password
        .execute(&dto.token, &dto.new_password)
        .await
    {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::ok("Password reset successful")
        }
        Err(ResetPasswordError::InvalidOrExpiredToken) => {
            warn!("Password reset with invalid or expired token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(ResetPasswordError::WeakPassword(e)) => {
            ApiResponse::bad_request("WEAK_PASSWORD", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
