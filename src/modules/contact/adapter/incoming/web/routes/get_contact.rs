use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::domain::ContactInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public contact details
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Contact details", body = inline(SuccessResponse<ContactInfo>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn get_contact_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get.execute().await {
        Ok(info) => ApiResponse::success("Contact info retrieved", info),
        Err(e) => {
            error!(error = %e, "Failed to load contact info");
            ApiResponse::internal_error("Server error", &e.to_string())
        }
    }
}
