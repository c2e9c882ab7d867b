use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::about::application::ports::incoming::use_cases::AboutError;
use crate::modules::about::domain::AboutSection;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAboutRequest {
    /// Plain English, or `{"en", "ar"}` to supply the Arabic yourself
    #[schema(value_type = Object, example = json!("I design and build web products."))]
    pub content: Option<TranslatableText>,
}

/// Update the about section
#[utoipa::path(
    put,
    path = "/api/about",
    tag = "about",
    request_body = UpdateAboutRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "About section updated", body = inline(SuccessResponse<AboutSection>)),
        (status = 400, description = "Content missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/about")]
pub async fn update_about_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<UpdateAboutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(content) = payload.into_inner().content else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Content is required");
    };

    match data.about.update.execute(content).await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "About section updated");
            ApiResponse::success("About section updated", section)
        }
        Err(AboutError::ContentRequired) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Content is required")
        }
        Err(e @ AboutError::RepositoryError(_)) => {
            error!(error = %e, "Failed to update about section");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::about::application::ports::incoming::use_cases::UpdateAboutUseCase;
    use crate::modules::translation::domain::BilingualText;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingUpdate {
        received: Mutex<Vec<TranslatableText>>,
    }

    #[async_trait]
    impl UpdateAboutUseCase for Arc<RecordingUpdate> {
        async fn execute(&self, content: TranslatableText) -> Result<AboutSection, AboutError> {
            self.received.lock().unwrap().push(content.clone());
            Ok(AboutSection {
                content: BilingualText::new(content.english(), "ترجمة"),
                profile_image_url: None,
                profile_image_public_id: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn call(
        mock: Arc<RecordingUpdate>,
        body: serde_json::Value,
        authorized: bool,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_update_about(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(update_about_handler),
        )
        .await;

        let mut req = test::TestRequest::put().uri("/api/about").set_json(body);
        if authorized {
            req = req.insert_header(("Authorization", bearer_for(Uuid::new_v4())));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_update_plain_content() {
        let mock = Arc::new(RecordingUpdate::default());

        let (status, json) = call(
            mock.clone(),
            serde_json::json!({ "content": "I build things" }),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "About section updated");
        assert_eq!(json["data"]["content"]["en"], "I build things");
        assert_eq!(
            mock.received.lock().unwrap()[0],
            TranslatableText::Plain("I build things".to_string())
        );
    }

    #[actix_web::test]
    async fn test_update_accepts_pair() {
        let mock = Arc::new(RecordingUpdate::default());

        let (status, _) = call(
            mock.clone(),
            serde_json::json!({ "content": { "en": "Hello", "ar": "مرحبا" } }),
            true,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            mock.received.lock().unwrap()[0].supplied_arabic(),
            Some("مرحبا")
        );
    }

    #[actix_web::test]
    async fn test_missing_content_is_400() {
        let mock = Arc::new(RecordingUpdate::default());

        let (status, json) = call(mock.clone(), serde_json::json!({}), true).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Content is required");
        assert!(mock.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_requires_bearer() {
        let mock = Arc::new(RecordingUpdate::default());

        let (status, _) = call(
            mock.clone(),
            serde_json::json!({ "content": "I build things" }),
            false,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(mock.received.lock().unwrap().is_empty());
    }
}
