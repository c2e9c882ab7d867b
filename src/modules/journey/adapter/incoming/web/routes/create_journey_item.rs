use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::super::journey_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::journey::application::ports::incoming::use_cases::CreateJourneyItemCommand;
use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::domain::TranslatableText;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJourneyItemRequest {
    #[schema(example = "18")]
    pub age: Option<String>,
    #[schema(value_type = Object, example = json!("First solo trip"))]
    pub title: Option<TranslatableText>,
    #[schema(value_type = Object, example = json!("Crossed the desert on foot."))]
    pub body: Option<TranslatableText>,
    pub order: Option<i32>,
}

/// Add a journey milestone
#[utoipa::path(
    post,
    path = "/api/journey",
    tag = "journey",
    request_body = CreateJourneyItemRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Journey item created", body = inline(SuccessResponse<JourneyItem>)),
        (status = 400, description = "Age, title or body missing", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/journey")]
pub async fn create_journey_item_handler(
    _admin: AuthenticatedAdmin,
    payload: web::Json<CreateJourneyItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CreateJourneyItemRequest {
        age,
        title,
        body,
        order,
    } = payload.into_inner();

    let Some(age) = age else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Age is required");
    };
    let Some(title) = title else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Title is required");
    };
    let Some(body) = body else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Body is required");
    };

    let command = CreateJourneyItemCommand {
        age,
        title,
        body,
        order: order.unwrap_or(0),
    };

    match data.journey.create.execute(command).await {
        Ok(item) => ApiResponse::created("Journey item created", item),
        Err(e) => journey_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::journey::application::service::JourneyService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use crate::tests::support::repositories::InMemoryJourneyRepository;
    use crate::tests::support::stubs::prefix_writer;
    use actix_web::{http::StatusCode, test, App};
    use uuid::Uuid;

    async fn call(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let service = JourneyService::new(InMemoryJourneyRepository::default(), prefix_writer());
        let state = TestAppStateBuilder::default()
            .with_create_journey_item(service)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(create_journey_item_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/journey")
            .insert_header(("Authorization", bearer_for(Uuid::new_v4())))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_create_journey_item() {
        let (status, json) = call(serde_json::json!({
            "age": "21",
            "title": "Moved to Amman",
            "body": { "en": "New city", "ar": "مدينة جديدة" },
            "order": 2
        }))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Journey item created");
        assert_eq!(json["data"]["title"]["ar"], "ar:Moved to Amman");
        assert_eq!(json["data"]["body"]["ar"], "مدينة جديدة");
        assert_eq!(json["data"]["order"], 2);
    }

    #[actix_web::test]
    async fn test_missing_age_is_400() {
        let (status, json) = call(serde_json::json!({ "title": "T", "body": "B" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Age is required");
    }
}
