use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::hero::domain::HeroSection;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public hero section
#[utoipa::path(
    get,
    path = "/api/hero",
    tag = "hero",
    responses(
        (status = 200, description = "Hero section", body = inline(SuccessResponse<HeroSection>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> impl Responder {
    match data.hero.get.execute().await {
        Ok(section) => ApiResponse::success("Hero section retrieved", section),
        Err(e) => {
            error!(error = %e, "Failed to load hero section");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::hero::application::ports::incoming::use_cases::{
        GetHeroUseCase, HeroError,
    };
    use crate::modules::hero::domain::{default_subtitle, default_title};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockGetHero;

    #[async_trait]
    impl GetHeroUseCase for MockGetHero {
        async fn execute(&self) -> Result<HeroSection, HeroError> {
            Ok(HeroSection {
                title: default_title(),
                subtitle: default_subtitle(),
                background_image_url: None,
                background_image_public_id: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    #[actix_web::test]
    async fn test_get_hero_defaults() {
        let state = TestAppStateBuilder::default()
            .with_get_hero(MockGetHero)
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_hero_handler)).await;

        let req = test::TestRequest::get().uri("/api/hero").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["title"]["en"], "Welcome to My Portfolio");
        assert_eq!(json["data"]["subtitle"]["ar"], "محترف مبدع");
        assert!(json["data"]["backgroundImageUrl"].is_null());
    }
}
