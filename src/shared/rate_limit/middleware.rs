use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderValue, RETRY_AFTER},
    middleware::Next,
    web, Error,
};
use std::sync::Arc;
use tracing::warn;

use super::limiter::{RateLimitDecision, RateLimiter};
use crate::shared::api::ApiResponse;

const LIMITED_PREFIX: &str = "/api/";

/// Applies the configured limiter to `/api/*`.
///
/// Fails open: if the backend cannot be reached the request is served and
/// the failure is logged.
pub async fn rate_limit<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    if !req.path().starts_with(LIMITED_PREFIX) {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    }

    let limiter = match req.app_data::<web::Data<Arc<dyn RateLimiter>>>() {
        Some(limiter) => Arc::clone(limiter.get_ref()),
        None => return next.call(req).await.map(ServiceResponse::map_into_left_body),
    };

    let client_key = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    match limiter.check(&client_key).await {
        Ok(RateLimitDecision::Allowed { .. }) => {
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
        Ok(RateLimitDecision::Limited { retry_after_secs }) => {
            warn!(client = %client_key, path = %req.path(), "Rate limit exceeded");

            let mut response = ApiResponse::too_many_requests(
                "Too many requests, please try again later",
            );
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));

            Ok(req.into_response(response).map_into_right_body())
        }
        Err(e) => {
            warn!(error = %e, "Rate limiter unavailable, allowing request");
            next.call(req).await.map(ServiceResponse::map_into_left_body)
        }
    }
}
