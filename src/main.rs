pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;

use crate::auth::adapter::outgoing::admin_repository_postgres::AdminRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, LegacyAwareHasher};
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{AdminRepository, PasswordHasher, TokenProvider};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    change_password::ChangePasswordUseCase,
    forgot_password::ForgotPasswordUseCase,
    login_admin::LoginAdminUseCase,
    reset_password::ResetPasswordUseCase,
    seed_admin::{AdminSeed, SeedAdminUseCase, SeedOutcome},
};
use crate::auth::application::AuthUseCases;
use crate::email::adapter::outgoing::{EmailConfig, SmtpEmailSender};
use crate::email::application::ports::outgoing::{EmailSender, PasswordResetNotifier};
use crate::email::application::services::PasswordResetEmailService;
use crate::modules::about::adapter::outgoing::AboutRepositoryPostgres;
use crate::modules::about::application::service::{AboutService, ProfileImageService};
use crate::modules::about::application::AboutUseCases;
use crate::modules::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::modules::contact::application::service::ContactService;
use crate::modules::contact::application::ContactUseCases;
use crate::modules::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::modules::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    UpdateExperienceService,
};
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::gallery::adapter::outgoing::GalleryRepositoryPostgres;
use crate::modules::gallery::application::service::{
    DeleteGalleryImageService, GetGalleryService, UpdateGalleryImageService,
    UploadGalleryImageService,
};
use crate::modules::gallery::application::GalleryUseCases;
use crate::modules::hero::adapter::outgoing::HeroRepositoryPostgres;
use crate::modules::hero::application::service::{BackgroundImageService, HeroService};
use crate::modules::hero::application::HeroUseCases;
use crate::modules::journey::adapter::outgoing::JourneyRepositoryPostgres;
use crate::modules::journey::application::service::JourneyService;
use crate::modules::journey::application::JourneyUseCases;
use crate::modules::media::adapter::outgoing::{CloudinaryAssetStore, CloudinaryConfig};
use crate::modules::media::application::ports::outgoing::AssetStore;
use crate::modules::testimonial::adapter::outgoing::TestimonialRepositoryPostgres;
use crate::modules::testimonial::application::service::TestimonialService;
use crate::modules::testimonial::application::TestimonialUseCases;
use crate::modules::translation::adapter::outgoing::{
    DisabledTranslator, GoogleTranslator, TranslatorConfig,
};
use crate::modules::translation::application::ports::outgoing::Translator;
use crate::modules::translation::application::services::BilingualWriter;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::{optional_or, parse_or, required, runtime_env};
use crate::shared::rate_limit::{rate_limit, RateLimitConfig, RateLimiter, RedisRateLimiter};

use actix_web::{middleware::from_fn, web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub about: AboutUseCases,
    pub hero: HeroUseCases,
    pub contact: ContactUseCases,
    pub experience: ExperienceUseCases,
    pub testimonial: TestimonialUseCases,
    pub journey: JourneyUseCases,
    pub gallery: GalleryUseCases,
}

/// Gateways shared by several modules.
#[cfg(not(tarpaulin_include))]
struct Gateways {
    writer: BilingualWriter,
    asset_store: Arc<dyn AssetStore>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    reset_notifier: Arc<dyn PasswordResetNotifier>,
}

#[cfg(not(tarpaulin_include))]
fn build_gateways() -> anyhow::Result<Gateways> {
    let translator_config = TranslatorConfig::from_env()?;
    let translator: Arc<dyn Translator> = if translator_config.enabled {
        Arc::new(GoogleTranslator::new(&translator_config)?)
    } else {
        warn!("Translation disabled, Arabic fields will mirror English");
        Arc::new(DisabledTranslator)
    };

    let asset_store: Arc<dyn AssetStore> =
        Arc::new(CloudinaryAssetStore::new(CloudinaryConfig::from_env()?)?);

    let password_hasher: Arc<dyn PasswordHasher> =
        Arc::new(LegacyAwareHasher::new(Argon2Hasher::from_env()?));

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()?));

    let email_sender: Arc<dyn EmailSender> =
        Arc::new(SmtpEmailSender::from_config(&EmailConfig::from_env()?)?);
    let reset_notifier: Arc<dyn PasswordResetNotifier> =
        Arc::new(PasswordResetEmailService::from_env(email_sender));

    Ok(Gateways {
        writer: BilingualWriter::new(translator),
        asset_store,
        password_hasher,
        token_provider,
        reset_notifier,
    })
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, gateways: &Gateways) -> AppState {
    let admin_repo: Arc<dyn AdminRepository> =
        Arc::new(AdminRepositoryPostgres::new(Arc::clone(db)));
    let policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(
            admin_repo.clone(),
            gateways.password_hasher.clone(),
            gateways.token_provider.clone(),
        )),
        forgot_password: Arc::new(ForgotPasswordUseCase::new(
            admin_repo.clone(),
            gateways.reset_notifier.clone(),
        )),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            admin_repo.clone(),
            gateways.password_hasher.clone(),
            policy.clone(),
        )),
        change_password: Arc::new(ChangePasswordUseCase::new(
            admin_repo,
            gateways.password_hasher.clone(),
            policy,
        )),
    };

    let about_repo = AboutRepositoryPostgres::new(Arc::clone(db));
    let about_service = Arc::new(AboutService::new(about_repo.clone(), gateways.writer.clone()));
    let profile_image = Arc::new(ProfileImageService::new(
        about_repo,
        gateways.writer.clone(),
        gateways.asset_store.clone(),
    ));
    let about = AboutUseCases {
        get: about_service.clone(),
        update: about_service,
        upload_image: profile_image.clone(),
        delete_image: profile_image,
    };

    let hero_repo = HeroRepositoryPostgres::new(Arc::clone(db));
    let hero_service = Arc::new(HeroService::new(hero_repo.clone(), gateways.writer.clone()));
    let background_image = Arc::new(BackgroundImageService::new(
        hero_repo,
        gateways.asset_store.clone(),
    ));
    let hero = HeroUseCases {
        get: hero_service.clone(),
        update: hero_service,
        upload_image: background_image.clone(),
        delete_image: background_image,
    };

    let contact_service = Arc::new(ContactService::new(ContactRepositoryPostgres::new(
        Arc::clone(db),
    )));
    let contact = ContactUseCases {
        get: contact_service.clone(),
        update: contact_service,
    };

    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(db));
    let experience = ExperienceUseCases {
        list: Arc::new(GetExperiencesService::new(experience_repo.clone())),
        create: Arc::new(CreateExperienceService::new(
            experience_repo.clone(),
            gateways.writer.clone(),
        )),
        update: Arc::new(UpdateExperienceService::new(
            experience_repo.clone(),
            gateways.writer.clone(),
        )),
        delete: Arc::new(DeleteExperienceService::new(experience_repo)),
    };

    let testimonial_service = Arc::new(TestimonialService::new(
        TestimonialRepositoryPostgres::new(Arc::clone(db)),
        gateways.writer.clone(),
    ));
    let testimonial = TestimonialUseCases {
        list: testimonial_service.clone(),
        create: testimonial_service.clone(),
        update: testimonial_service.clone(),
        delete: testimonial_service,
    };

    let journey_service = Arc::new(JourneyService::new(
        JourneyRepositoryPostgres::new(Arc::clone(db)),
        gateways.writer.clone(),
    ));
    let journey = JourneyUseCases {
        list: journey_service.clone(),
        create: journey_service.clone(),
        update: journey_service.clone(),
        delete: journey_service,
    };

    let gallery_repo = GalleryRepositoryPostgres::new(Arc::clone(db));
    let gallery = GalleryUseCases {
        list: Arc::new(GetGalleryService::new(gallery_repo.clone())),
        upload: Arc::new(UploadGalleryImageService::new(
            gallery_repo.clone(),
            gateways.asset_store.clone(),
        )),
        update: Arc::new(UpdateGalleryImageService::new(gallery_repo.clone())),
        delete: Arc::new(DeleteGalleryImageService::new(
            gallery_repo,
            gateways.asset_store.clone(),
        )),
    };

    AppState {
        auth,
        about,
        hero,
        contact,
        experience,
        testimonial,
        journey,
        gallery,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = runtime_env();
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // reqwest and deadpool-redis both pull rustls; pin the provider once.
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("rustls crypto provider was already installed");
    }

    let db_url = required("DATABASE_URL")?;
    let redis_url = required("REDIS_URL")?;
    let host = optional_or("HOST", "0.0.0.0");
    let port: u16 = parse_or("PORT", 3000u16)?;

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    let limiter: Arc<dyn RateLimiter> = Arc::new(RedisRateLimiter::new(
        Arc::clone(&redis_arc),
        RateLimitConfig::from_env()?,
    ));

    let gateways = build_gateways()?;

    let seed = SeedAdminUseCase::new(
        Arc::new(AdminRepositoryPostgres::new(Arc::clone(&db_arc))),
        gateways.password_hasher.clone(),
    );
    match seed.execute(&AdminSeed::from_env()?).await? {
        SeedOutcome::Created => info!("Initial admin account created"),
        SeedOutcome::AlreadyPresent => info!("Admin account already present, skipping seed"),
    }

    let state = build_state(&db_arc, &gateways);
    let token_provider = Arc::clone(&gateways.token_provider);
    let serve_docs = env != "production";

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(from_fn(rate_limit))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&limiter)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes);

        if serve_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            );
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{about, contact, experience, gallery, hero, journey, testimonial};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::adapter::incoming::web::routes::login_handler);
    cfg.service(auth::adapter::incoming::web::routes::forgot_password_handler);
    cfg.service(auth::adapter::incoming::web::routes::reset_password_handler);
    cfg.service(auth::adapter::incoming::web::routes::change_password_handler);
    // About
    cfg.service(about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(about::adapter::incoming::web::routes::update_about_handler);
    cfg.service(about::adapter::incoming::web::routes::upload_profile_image_handler);
    cfg.service(about::adapter::incoming::web::routes::delete_profile_image_handler);
    // Hero
    cfg.service(hero::adapter::incoming::web::routes::get_hero_handler);
    cfg.service(hero::adapter::incoming::web::routes::update_hero_handler);
    cfg.service(hero::adapter::incoming::web::routes::upload_background_image_handler);
    cfg.service(hero::adapter::incoming::web::routes::delete_background_image_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::update_contact_handler);
    // Experience
    cfg.service(experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(experience::adapter::incoming::web::routes::delete_experience_handler);
    // Testimonial
    cfg.service(testimonial::adapter::incoming::web::routes::get_testimonials_handler);
    cfg.service(testimonial::adapter::incoming::web::routes::create_testimonial_handler);
    cfg.service(testimonial::adapter::incoming::web::routes::update_testimonial_handler);
    cfg.service(testimonial::adapter::incoming::web::routes::delete_testimonial_handler);
    // Journey
    cfg.service(journey::adapter::incoming::web::routes::get_journey_handler);
    cfg.service(journey::adapter::incoming::web::routes::create_journey_item_handler);
    cfg.service(journey::adapter::incoming::web::routes::update_journey_item_handler);
    cfg.service(journey::adapter::incoming::web::routes::delete_journey_item_handler);
    // Gallery
    cfg.service(gallery::adapter::incoming::web::routes::get_gallery_handler);
    cfg.service(gallery::adapter::incoming::web::routes::upload_gallery_image_handler);
    cfg.service(gallery::adapter::incoming::web::routes::update_gallery_image_handler);
    cfg.service(gallery::adapter::incoming::web::routes::delete_gallery_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
