use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::application::use_cases::forgot_password::ForgotPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ForgotPasswordRequestDto {
    #[schema(example = "admin@example.com")]
    #[serde(default)]
    pub email: String,
}

/// Request a password reset email
///
/// Stores a one-hour reset token for the admin and mails a reset link.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequestDto,
    responses(
        (status = 200, description = "Reset email sent", body = MessageResponse),
        (status = 400, description = "Email missing", body = ErrorResponse),
        (status = 404, description = "No admin with this email", body = ErrorResponse),
        (status = 500, description = "Mail delivery or database failure", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<ForgotPasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.forgot_password.execute(&req.email).await {
        Ok(()) => {
            info!("Password reset email sent");
            ApiResponse::ok("Reset email sent")
        }
        Err(ForgotPasswordError::EmptyEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Email is required")
        }
        Err(ForgotPasswordError::AdminNotFound) => {
            warn!("Password reset requested for unknown email");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ ForgotPasswordError::NotificationFailed(_)) => {
            error!(error = %e, "Password reset email failed");
            ApiResponse::internal_error("Failed to send reset email", &e.to_string())
        }
        Err(e @ ForgotPasswordError::RepositoryError(_)) => {
            error!(error = %e, "Password reset request failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
