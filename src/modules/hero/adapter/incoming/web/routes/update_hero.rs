use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::hero::application::ports::incoming::use_cases::UpdateHeroCommand;
use crate::modules::hero::domain::HeroSection;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted or blank fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateHeroRequest {
    #[schema(value_type = Option<Object>, example = json!("Hi, I'm Sam"))]
    pub title: Option<TranslatableText>,
    #[schema(value_type = Option<Object>, example = json!("Travel photographer"))]
    pub subtitle: Option<TranslatableText>,
}

/// Update the hero title and subtitle
#[utoipa::path(
    put,
    path = "/api/hero",
    tag = "hero",
    request_body = UpdateHeroRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Hero section updated", body = inline(SuccessResponse<HeroSection>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/hero")]
pub async fn update_hero_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<UpdateHeroRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command = UpdateHeroCommand::new(payload.title, payload.subtitle);

    match data.hero.update.execute(command).await {
        Ok(section) => {
            info!(admin_id = %admin.admin_id, "Hero section updated");
            ApiResponse::success("Hero section updated", section)
        }
        Err(e) => {
            error!(error = %e, "Failed to update hero section");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
