use crate::api::schemas::{
    ErrorDetail, ErrorResponse, GalleryUploadForm, ImageUploadForm, MessageResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequestDto, ForgotPasswordRequestDto, LoginRequestDto, LoginResponse,
    ResetPasswordRequestDto,
};
use crate::modules::about::adapter::incoming::web::routes::UpdateAboutRequest;
use crate::modules::about::domain::AboutSection;
use crate::modules::contact::adapter::incoming::web::routes::UpdateContactRequest;
use crate::modules::contact::domain::ContactInfo;
use crate::modules::experience::adapter::incoming::web::routes::{
    CreateExperienceRequest, UpdateExperienceRequest,
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::gallery::adapter::incoming::web::routes::UpdateGalleryImageRequest;
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::hero::adapter::incoming::web::routes::UpdateHeroRequest;
use crate::modules::hero::domain::HeroSection;
use crate::modules::journey::adapter::incoming::web::routes::{
    CreateJourneyItemRequest, UpdateJourneyItemRequest,
};
use crate::modules::journey::domain::JourneyItem;
use crate::modules::testimonial::adapter::incoming::web::routes::{
    CreateTestimonialRequest, UpdateTestimonialRequest,
};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::{BilingualText, TranslatableText};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Bilingual (English/Arabic) content API for a single-owner portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // About
        crate::modules::about::adapter::incoming::web::routes::get_about_handler,
        crate::modules::about::adapter::incoming::web::routes::update_about_handler,
        crate::modules::about::adapter::incoming::web::routes::upload_profile_image_handler,
        crate::modules::about::adapter::incoming::web::routes::delete_profile_image_handler,

        // Hero
        crate::modules::hero::adapter::incoming::web::routes::get_hero_handler,
        crate::modules::hero::adapter::incoming::web::routes::update_hero_handler,
        crate::modules::hero::adapter::incoming::web::routes::upload_background_image_handler,
        crate::modules::hero::adapter::incoming::web::routes::delete_background_image_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::get_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::update_contact_handler,

        // Experience
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Testimonials
        crate::modules::testimonial::adapter::incoming::web::routes::get_testimonials_handler,
        crate::modules::testimonial::adapter::incoming::web::routes::create_testimonial_handler,
        crate::modules::testimonial::adapter::incoming::web::routes::update_testimonial_handler,
        crate::modules::testimonial::adapter::incoming::web::routes::delete_testimonial_handler,

        // Journey
        crate::modules::journey::adapter::incoming::web::routes::get_journey_handler,
        crate::modules::journey::adapter::incoming::web::routes::create_journey_item_handler,
        crate::modules::journey::adapter::incoming::web::routes::update_journey_item_handler,
        crate::modules::journey::adapter::incoming::web::routes::delete_journey_item_handler,

        // Gallery
        crate::modules::gallery::adapter::incoming::web::routes::get_gallery_handler,
        crate::modules::gallery::adapter::incoming::web::routes::upload_gallery_image_handler,
        crate::modules::gallery::adapter::incoming::web::routes::update_gallery_image_handler,
        crate::modules::gallery::adapter::incoming::web::routes::delete_gallery_image_handler,
    ),
    components(
        schemas(
            // Envelopes
            MessageResponse,
            ErrorResponse,
            ErrorDetail,
            ImageUploadForm,
            GalleryUploadForm,

            // Bilingual values
            BilingualText,
            TranslatableText,

            // Documents
            AboutSection,
            HeroSection,
            ContactInfo,
            ExperienceItem,
            TestimonialItem,
            JourneyItem,
            GalleryImage,

            // Auth DTOs
            LoginRequestDto,
            LoginResponse,
            ForgotPasswordRequestDto,
            ResetPasswordRequestDto,
            ChangePasswordRequestDto,

            // Content DTOs
            UpdateAboutRequest,
            UpdateHeroRequest,
            UpdateContactRequest,
            CreateExperienceRequest,
            UpdateExperienceRequest,
            CreateTestimonialRequest,
            UpdateTestimonialRequest,
            CreateJourneyItemRequest,
            UpdateJourneyItemRequest,
            UpdateGalleryImageRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication endpoints"),
        (name = "about", description = "About section"),
        (name = "hero", description = "Hero section"),
        (name = "contact", description = "Contact details"),
        (name = "experience", description = "Experience entries"),
        (name = "testimonial", description = "Testimonials"),
        (name = "journey", description = "Journey timeline"),
        (name = "gallery", description = "Gallery images"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
