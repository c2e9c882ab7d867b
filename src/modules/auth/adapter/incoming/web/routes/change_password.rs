use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::auth::application::use_cases::change_password::ChangePasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequestDto {
    pub current_password: String,
    pub new_password: String,
}

/// Change the signed-in admin's password
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "auth",
    request_body = ChangePasswordRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Weak new password", body = ErrorResponse),
        (status = 401, description = "Missing token or wrong current password", body = ErrorResponse),
        (status = 404, description = "Admin no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    admin: AuthenticatedAdmin,
    req: web::Json<ChangePasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .auth
        .change_password
        .execute(admin.admin_id, &dto.current_password, &dto.new_password)
        .await
    {
        Ok(()) => {
            info!(admin_id = %admin.admin_id, "Password changed");
            ApiResponse::ok("Password changed successfully")
        }
        Err(ChangePasswordError::IncorrectCurrentPassword) => {
            warn!(admin_id = %admin.admin_id, "Change password with wrong current password");
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Current password is incorrect")
        }
        Err(ChangePasswordError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }
        Err(ChangePasswordError::WeakPassword(e)) => {
            ApiResponse::bad_request("WEAK_PASSWORD", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, "Change password failed");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::TokenProvider;
    use crate::auth::application::use_cases::change_password::IChangePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_jwt_service};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Default)]
    struct CountingChange {
        calls: AtomicUsize,
        wrong_current: bool,
    }

    #[async_trait]
    impl IChangePasswordUseCase for Arc<CountingChange> {
        async fn execute(
            &self,
            _admin_id: Uuid,
            _current_password: &str,
            _new_password: &str,
        ) -> Result<(), ChangePasswordError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.wrong_current {
                Err(ChangePasswordError::IncorrectCurrentPassword)
            } else {
                Ok(())
            }
        }
    }

    async fn call(
        mock: Arc<CountingChange>,
        authorization: Option<String>,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_change_password(mock)
            .build();
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(provider))
                .service(change_password_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/auth/change-password")
            .set_json(serde_json::json!({
                "currentPassword": "old-password",
                "newPassword": "new-password"
            }));
        if let Some(value) = authorization {
            req = req.insert_header(("Authorization", value));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_change_password_success() {
        let mock = Arc::new(CountingChange::default());

        let (status, json) = call(mock.clone(), Some(bearer_for(Uuid::new_v4()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Password changed successfully");
        assert_eq!(mock.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_wrong_current_password_is_401() {
        let mock = Arc::new(CountingChange {
            wrong_current: true,
            ..Default::default()
        });

        let (status, json) = call(mock, Some(bearer_for(Uuid::new_v4()))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Current password is incorrect");
    }

    #[actix_web::test]
    async fn test_without_bearer_use_case_never_runs() {
        let mock = Arc::new(CountingChange::default());

        let (status, _) = call(mock.clone(), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(mock.calls.load(Ordering::SeqCst), 0);
    }
}
