use actix_web::{get, web, Responder};

use super::super::testimonial_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public testimonial list
#[utoipa::path(
    get,
    path = "/api/testimonial",
    tag = "testimonial",
    responses(
        (status = 200, description = "Testimonials", body = inline(SuccessResponse<Vec<TestimonialItem>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/testimonial")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.testimonial.list.execute().await {
        Ok(items) => ApiResponse::success("Testimonials retrieved", items),
        Err(e) => testimonial_error_response(e),
    }
}
