// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Human-readable outcome
    #[schema(example = "Testimonial created")]
    pub message: String,
    /// Response data
    pub data: T,
}

/// Success wrapper for operations that return no document
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Testimonial deleted")]
    pub message: String,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Testimonial not found")]
    pub message: String,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "TESTIMONIAL_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Testimonial not found")]
    pub message: String,

    /// Diagnostic text, present on server errors only
    #[schema(example = json!(null))]
    pub detail: Option<String>,
}

/// Multipart body carrying a single `image` file part
#[derive(ToSchema)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Multipart body for a new gallery picture
#[derive(ToSchema)]
pub struct GalleryUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Plain caption, empty when omitted
    #[schema(example = "Sunset over the dunes")]
    pub caption: Option<String>,
    /// Integer position, 0 when omitted
    #[schema(example = "0")]
    pub order: Option<String>,
}
