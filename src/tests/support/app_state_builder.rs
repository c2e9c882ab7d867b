use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, forgot_password::IForgotPasswordUseCase,
    login_admin::ILoginAdminUseCase, reset_password::IResetPasswordUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::modules::about::application::ports::incoming::use_cases::{
    DeleteProfileImageUseCase, GetAboutUseCase, UpdateAboutUseCase, UploadProfileImageUseCase,
};
use crate::modules::about::application::AboutUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactUseCase, UpdateContactUseCase,
};
use crate::modules::contact::application::ContactUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::modules::experience::application::ExperienceUseCases;
use crate::modules::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryImageUseCase, GetGalleryUseCase, UpdateGalleryImageUseCase,
    UploadGalleryImageUseCase,
};
use crate::modules::gallery::application::GalleryUseCases;
use crate::modules::hero::application::ports::incoming::use_cases::{
    DeleteBackgroundImageUseCase, GetHeroUseCase, UpdateHeroUseCase, UploadBackgroundImageUseCase,
};
use crate::modules::hero::application::HeroUseCases;
use crate::modules::journey::application::ports::incoming::use_cases::{
    CreateJourneyItemUseCase, DeleteJourneyItemUseCase, GetJourneyUseCase,
    UpdateJourneyItemUseCase,
};
use crate::modules::journey::application::JourneyUseCases;
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialUseCase, DeleteTestimonialUseCase, GetTestimonialsUseCase,
    UpdateTestimonialUseCase,
};
use crate::modules::testimonial::application::TestimonialUseCases;
use crate::tests::support::stubs::NotUsed;
use crate::AppState;

/// Starts with every use case stubbed out; tests swap in the one they drive.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    about: AboutUseCases,
    hero: HeroUseCases,
    contact: ContactUseCases,
    experience: ExperienceUseCases,
    testimonial: TestimonialUseCases,
    journey: JourneyUseCases,
    gallery: GalleryUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(NotUsed);
        Self {
            auth: AuthUseCases {
                login: stub.clone(),
                forgot_password: stub.clone(),
                reset_password: stub.clone(),
                change_password: stub.clone(),
            },
            about: AboutUseCases {
                get: stub.clone(),
                update: stub.clone(),
                upload_image: stub.clone(),
                delete_image: stub.clone(),
            },
            hero: HeroUseCases {
                get: stub.clone(),
                update: stub.clone(),
                upload_image: stub.clone(),
                delete_image: stub.clone(),
            },
            contact: ContactUseCases {
                get: stub.clone(),
                update: stub.clone(),
            },
            experience: ExperienceUseCases {
                list: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            testimonial: TestimonialUseCases {
                list: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            journey: JourneyUseCases {
                list: stub.clone(),
                create: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            gallery: GalleryUseCases {
                list: stub.clone(),
                upload: stub.clone(),
                update: stub.clone(),
                delete: stub,
            },
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_login(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_forgot_password(
        mut self,
        uc: impl IForgotPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.forgot_password = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl IChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.change_password = Arc::new(uc);
        self
    }

    // About
    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.about.get = Arc::new(uc);
        self
    }

    pub fn with_update_about(
        mut self,
        uc: impl UpdateAboutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.about.update = Arc::new(uc);
        self
    }

    pub fn with_upload_profile_image(
        mut self,
        uc: impl UploadProfileImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.about.upload_image = Arc::new(uc);
        self
    }

    pub fn with_delete_profile_image(
        mut self,
        uc: impl DeleteProfileImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.about.delete_image = Arc::new(uc);
        self
    }

    // Hero
    pub fn with_get_hero(mut self, uc: impl GetHeroUseCase + Send + Sync + 'static) -> Self {
        self.hero.get = Arc::new(uc);
        self
    }

    pub fn with_update_hero(mut self, uc: impl UpdateHeroUseCase + Send + Sync + 'static) -> Self {
        self.hero.update = Arc::new(uc);
        self
    }

    pub fn with_upload_background_image(
        mut self,
        uc: impl UploadBackgroundImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hero.upload_image = Arc::new(uc);
        self
    }

    pub fn with_delete_background_image(
        mut self,
        uc: impl DeleteBackgroundImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hero.delete_image = Arc::new(uc);
        self
    }

    // Contact
    pub fn with_get_contact(mut self, uc: impl GetContactUseCase + Send + Sync + 'static) -> Self {
        self.contact.get = Arc::new(uc);
        self
    }

    pub fn with_update_contact(
        mut self,
        uc: impl UpdateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.update = Arc::new(uc);
        self
    }

    // Experience
    pub fn with_get_experiences(
        mut self,
        uc: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.list = Arc::new(uc);
        self
    }

    pub fn with_create_experience(
        mut self,
        uc: impl CreateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_update_experience(
        mut self,
        uc: impl UpdateExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.update = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(
        mut self,
        uc: impl DeleteExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    // Testimonial
    pub fn with_get_testimonials(
        mut self,
        uc: impl GetTestimonialsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.list = Arc::new(uc);
        self
    }

    pub fn with_create_testimonial(
        mut self,
        uc: impl CreateTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.create = Arc::new(uc);
        self
    }

    pub fn with_update_testimonial(
        mut self,
        uc: impl UpdateTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.update = Arc::new(uc);
        self
    }

    pub fn with_delete_testimonial(
        mut self,
        uc: impl DeleteTestimonialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.testimonial.delete = Arc::new(uc);
        self
    }

    // Journey
    pub fn with_get_journey(mut self, uc: impl GetJourneyUseCase + Send + Sync + 'static) -> Self {
        self.journey.list = Arc::new(uc);
        self
    }

    pub fn with_create_journey_item(
        mut self,
        uc: impl CreateJourneyItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.journey.create = Arc::new(uc);
        self
    }

    pub fn with_update_journey_item(
        mut self,
        uc: impl UpdateJourneyItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.journey.update = Arc::new(uc);
        self
    }

    pub fn with_delete_journey_item(
        mut self,
        uc: impl DeleteJourneyItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.journey.delete = Arc::new(uc);
        self
    }

    // Gallery
    pub fn with_get_gallery(mut self, uc: impl GetGalleryUseCase + Send + Sync + 'static) -> Self {
        self.gallery.list = Arc::new(uc);
        self
    }

    pub fn with_upload_gallery_image(
        mut self,
        uc: impl UploadGalleryImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.upload = Arc::new(uc);
        self
    }

    pub fn with_update_gallery_image(
        mut self,
        uc: impl UpdateGalleryImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.update = Arc::new(uc);
        self
    }

    pub fn with_delete_gallery_image(
        mut self,
        uc: impl DeleteGalleryImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            about: self.about,
            hero: self.hero,
            contact: self.contact,
            experience: self.experience,
            testimonial: self.testimonial,
            journey: self.journey,
            gallery: self.gallery,
        })
    }
}
