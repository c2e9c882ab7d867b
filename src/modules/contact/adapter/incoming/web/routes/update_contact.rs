use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, UpdateContactCommand,
};
use crate::modules::contact::domain::ContactInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[schema(example = "sam@example.com")]
    pub email: Option<String>,
    #[schema(example = "Sam")]
    pub name: Option<String>,
    #[schema(example = "sam.travels")]
    pub instagram_handle: Option<String>,
}

/// Update contact details
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    put,
    path = "/api/contact",
    tag = "contact",
    request_body = UpdateContactRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Contact info updated", body = inline(SuccessResponse<ContactInfo>)),
        (status = 400, description = "Invalid email or field too long", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/contact")]
pub async fn update_contact_handler(
    admin: AuthenticatedAdmin,
    payload: web::Json<UpdateContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let command =
        match UpdateContactCommand::new(payload.email, payload.name, payload.instagram_handle) {
            Ok(command) => command,
            Err(e) => return contact_error_response(e),
        };

    match data.contact.update.execute(command).await {
        Ok(info) => {
            info!(admin_id = %admin.admin_id, "Contact info updated");
            ApiResponse::success("Contact info updated", info)
        }
        Err(e) => contact_error_response(e),
    }
}

fn contact_error_response(e: ContactError) -> actix_web::HttpResponse {
    match e {
        ContactError::InvalidEmail => ApiResponse::bad_request("INVALID_EMAIL", &e.to_string()),
        ContactError::TooLong { .. } => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ContactError::RepositoryError(_) => {
            error!(error = %e, "Failed to update contact info");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
