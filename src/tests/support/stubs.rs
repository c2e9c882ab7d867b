#![cfg(test)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::use_cases::{
    change_password::{ChangePasswordError, IChangePasswordUseCase},
    forgot_password::{ForgotPasswordError, IForgotPasswordUseCase},
    login_admin::{ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest},
    reset_password::{IResetPasswordUseCase, ResetPasswordError},
};
use crate::modules::about::application::ports::incoming::use_cases::{
    AboutError, DeleteProfileImageUseCase, GetAboutUseCase, ProfileImageError,
    UpdateAboutUseCase, UploadProfileImageUseCase,
};
use crate::modules::about::domain::AboutSection;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, GetContactUseCase, UpdateContactCommand, UpdateContactUseCase,
};
use crate::modules::contact::domain::ContactInfo;
use crate::modules::experience::application::ports::incoming::use_cases::{
    CreateExperienceCommand, CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError,
    GetExperiencesUseCase, UpdateExperienceCommand, UpdateExperienceUseCase,
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::gallery::application::ports::incoming::use_cases::{
    DeleteGalleryImageUseCase, GalleryError, GetGalleryUseCase, UpdateGalleryImageCommand,
    UpdateGalleryImageUseCase, UploadGalleryImageCommand, UploadGalleryImageUseCase,
};
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::hero::application::ports::incoming::use_cases::{
    BackgroundImageError, DeleteBackgroundImageUseCase, GetHeroUseCase, HeroError,
    UpdateHeroCommand, UpdateHeroUseCase, UploadBackgroundImageUseCase,
};
use crate::modules::hero::domain::HeroSection;
use crate::modules::journey::application::ports::incoming::use_cases::{
    CreateJourneyItemCommand, CreateJourneyItemUseCase, DeleteJourneyItemUseCase, JourneyError,
    GetJourneyUseCase, UpdateJourneyItemCommand, UpdateJourneyItemUseCase,
};
use crate::modules::journey::domain::JourneyItem;
use crate::modules::media::application::ports::outgoing::{AssetStore, AssetStoreError};
use crate::modules::media::domain::{AssetFolder, ImageUpload, StoredAsset};
use crate::modules::testimonial::application::ports::incoming::use_cases::{
    CreateTestimonialCommand, CreateTestimonialUseCase, DeleteTestimonialUseCase,
    GetTestimonialsUseCase, TestimonialError, UpdateTestimonialCommand,
    UpdateTestimonialUseCase,
};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::application::ports::outgoing::{TranslationError, Translator};
use crate::modules::translation::application::services::BilingualWriter;
use crate::modules::translation::domain::{Language, TranslatableText};

/// Placeholder for every use case a test does not exercise.
#[derive(Default, Clone)]
pub struct NotUsed;

const NOT_USED: &str = "Not used in this test";

// ---------------------------------------------------------------- auth

#[async_trait]
impl ILoginAdminUseCase for NotUsed {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl IForgotPasswordUseCase for NotUsed {
    async fn execute(&self, _email: &str) -> Result<(), ForgotPasswordError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl IResetPasswordUseCase for NotUsed {
    async fn execute(&self, _token: &str, _new_password: &str) -> Result<(), ResetPasswordError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl IChangePasswordUseCase for NotUsed {
    async fn execute(
        &self,
        _admin_id: Uuid,
        _current_password: &str,
        _new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("{NOT_USED}")
    }
}

// ---------------------------------------------------------------- singletons

#[async_trait]
impl GetAboutUseCase for NotUsed {
    async fn execute(&self) -> Result<AboutSection, AboutError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateAboutUseCase for NotUsed {
    async fn execute(&self, _content: TranslatableText) -> Result<AboutSection, AboutError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UploadProfileImageUseCase for NotUsed {
    async fn execute(&self, _image: ImageUpload) -> Result<AboutSection, ProfileImageError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteProfileImageUseCase for NotUsed {
    async fn execute(&self) -> Result<AboutSection, ProfileImageError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetHeroUseCase for NotUsed {
    async fn execute(&self) -> Result<HeroSection, HeroError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateHeroUseCase for NotUsed {
    async fn execute(&self, _command: UpdateHeroCommand) -> Result<HeroSection, HeroError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UploadBackgroundImageUseCase for NotUsed {
    async fn execute(&self, _image: ImageUpload) -> Result<HeroSection, BackgroundImageError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteBackgroundImageUseCase for NotUsed {
    async fn execute(&self) -> Result<HeroSection, BackgroundImageError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetContactUseCase for NotUsed {
    async fn execute(&self) -> Result<ContactInfo, ContactError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateContactUseCase for NotUsed {
    async fn execute(&self, _command: UpdateContactCommand) -> Result<ContactInfo, ContactError> {
        unimplemented!("{NOT_USED}")
    }
}

// ---------------------------------------------------------------- lists

#[async_trait]
impl GetExperiencesUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<ExperienceItem>, ExperienceError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateExperienceUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateExperienceUseCase for NotUsed {
    async fn execute(
        &self,
        _id: Uuid,
        _command: UpdateExperienceCommand,
    ) -> Result<ExperienceItem, ExperienceError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteExperienceUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<(), ExperienceError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetTestimonialsUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<TestimonialItem>, TestimonialError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateTestimonialUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateTestimonialUseCase for NotUsed {
    async fn execute(
        &self,
        _id: Uuid,
        _command: UpdateTestimonialCommand,
    ) -> Result<TestimonialItem, TestimonialError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteTestimonialUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<(), TestimonialError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetJourneyUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<JourneyItem>, JourneyError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl CreateJourneyItemUseCase for NotUsed {
    async fn execute(
        &self,
        _command: CreateJourneyItemCommand,
    ) -> Result<JourneyItem, JourneyError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateJourneyItemUseCase for NotUsed {
    async fn execute(
        &self,
        _id: Uuid,
        _command: UpdateJourneyItemCommand,
    ) -> Result<JourneyItem, JourneyError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteJourneyItemUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<(), JourneyError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl GetGalleryUseCase for NotUsed {
    async fn execute(&self) -> Result<Vec<GalleryImage>, GalleryError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UploadGalleryImageUseCase for NotUsed {
    async fn execute(
        &self,
        _command: UploadGalleryImageCommand,
    ) -> Result<GalleryImage, GalleryError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl UpdateGalleryImageUseCase for NotUsed {
    async fn execute(
        &self,
        _id: Uuid,
        _command: UpdateGalleryImageCommand,
    ) -> Result<GalleryImage, GalleryError> {
        unimplemented!("{NOT_USED}")
    }
}

#[async_trait]
impl DeleteGalleryImageUseCase for NotUsed {
    async fn execute(&self, _id: Uuid) -> Result<(), GalleryError> {
        unimplemented!("{NOT_USED}")
    }
}

// ---------------------------------------------------------------- gateways

/// Answers `ar:{text}` and counts how often it was asked.
#[derive(Default)]
pub struct CountingTranslator {
    calls: AtomicUsize,
}

impl CountingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("ar:{}", text))
    }
}

/// Writer whose Arabic side is the English text prefixed with `ar:`.
pub fn prefix_writer() -> BilingualWriter {
    BilingualWriter::new(Arc::new(CountingTranslator::default()))
}

/// Fake image host. Keeps an ordered log such as `upload:portfolio_hero` and
/// `destroy:{public_id}`; uploads are numbered from 1 per store.
#[derive(Default)]
pub struct RecordingAssetStore {
    events: Mutex<Vec<String>>,
    uploads: AtomicUsize,
    fail_upload: bool,
    fail_destroy: bool,
}

impl RecordingAssetStore {
    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Default::default()
        }
    }

    pub fn failing_destroy() -> Self {
        Self {
            fail_destroy: true,
            ..Default::default()
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for RecordingAssetStore {
    async fn upload(
        &self,
        _image: ImageUpload,
        folder: AssetFolder,
    ) -> Result<StoredAsset, AssetStoreError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("upload:{}", folder.name()));
        if self.fail_upload {
            return Err(AssetStoreError::Request("host unreachable".to_string()));
        }

        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(StoredAsset {
            url: format!("https://cdn.test/{}/{}.png", folder.name(), n),
            public_id: format!("{}/{}", folder.name(), n),
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), AssetStoreError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("destroy:{}", public_id));
        if self.fail_destroy {
            return Err(AssetStoreError::Rejected {
                status: 500,
                message: "host error".to_string(),
            });
        }
        Ok(())
    }
}

pub fn png_upload() -> ImageUpload {
    ImageUpload {
        file_name: "photo.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}
