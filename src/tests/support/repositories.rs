#![cfg(test)]

//! In-memory repositories with shared state, so a test can hand a clone to a
//! service and inspect what was written afterwards.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::modules::about::domain::AboutSection;
use crate::modules::contact::application::ports::incoming::use_cases::UpdateContactCommand;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::modules::contact::domain::ContactInfo;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceChanges, ExperienceRepository, ExperienceRepositoryError, NewExperience,
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::gallery::application::ports::outgoing::{
    GalleryChanges, GalleryRepository, GalleryRepositoryError, NewGalleryImage,
};
use crate::modules::gallery::domain::GalleryImage;
use crate::modules::hero::application::ports::outgoing::{HeroRepository, HeroRepositoryError};
use crate::modules::hero::domain::HeroSection;
use crate::modules::journey::application::ports::outgoing::{
    JourneyChanges, JourneyRepository, JourneyRepositoryError, NewJourneyItem,
};
use crate::modules::journey::domain::JourneyItem;
use crate::modules::media::domain::StoredAsset;
use crate::modules::testimonial::application::ports::outgoing::{
    NewTestimonial, TestimonialChanges, TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::BilingualText;
use crate::shared::patch::PatchField;

const OFFLINE: &str = "database offline";

/// Strictly increasing timestamps, so tie-breaking on `created_at` is
/// deterministic even when rows are created within the same tick.
fn stamp(sequence: &mut i64) -> DateTime<Utc> {
    *sequence += 1;
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(1_700_000_000 + *sequence)
}

// ---------------------------------------------------------------- about

#[derive(Clone, Default)]
pub struct InMemoryAboutRepository {
    section: Arc<Mutex<Option<AboutSection>>>,
    fail: bool,
}

impl InMemoryAboutRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn current(&self) -> Option<AboutSection> {
        self.section.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), AboutRepositoryError> {
        if self.fail {
            return Err(AboutRepositoryError::DatabaseError(OFFLINE.to_string()));
        }
        Ok(())
    }

    fn modify(
        &self,
        change: impl FnOnce(&mut AboutSection),
    ) -> Result<AboutSection, AboutRepositoryError> {
        self.check()?;
        let mut guard = self.section.lock().unwrap();
        let section = guard
            .as_mut()
            .ok_or_else(|| AboutRepositoryError::DatabaseError("no about row".to_string()))?;
        change(section);
        section.updated_at = Utc::now();
        Ok(section.clone())
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutRepository {
    async fn find(&self) -> Result<Option<AboutSection>, AboutRepositoryError> {
        self.check()?;
        Ok(self.current())
    }

    async fn insert_if_absent(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError> {
        self.check()?;
        let mut guard = self.section.lock().unwrap();
        let section = guard.get_or_insert_with(|| {
            let now = Utc::now();
            AboutSection {
                content,
                profile_image_url: None,
                profile_image_public_id: None,
                created_at: now,
                updated_at: now,
            }
        });
        Ok(section.clone())
    }

    async fn save_content(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError> {
        self.check()?;
        {
            let mut guard = self.section.lock().unwrap();
            if guard.is_none() {
                let now = Utc::now();
                *guard = Some(AboutSection {
                    content: content.clone(),
                    profile_image_url: None,
                    profile_image_public_id: None,
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        self.modify(|section| section.content = content)
    }

    async fn set_profile_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<AboutSection, AboutRepositoryError> {
        self.modify(|section| {
            let (url, public_id) = split_asset(image);
            section.profile_image_url = url;
            section.profile_image_public_id = public_id;
        })
    }
}

fn split_asset(image: Option<StoredAsset>) -> (Option<String>, Option<String>) {
    match image {
        Some(asset) => (Some(asset.url), Some(asset.public_id)),
        None => (None, None),
    }
}

// ---------------------------------------------------------------- hero

#[derive(Clone, Default)]
pub struct InMemoryHeroRepository {
    section: Arc<Mutex<Option<HeroSection>>>,
}

impl InMemoryHeroRepository {
    pub fn current(&self) -> Option<HeroSection> {
        self.section.lock().unwrap().clone()
    }

    /// Stores a section with the default text and the given background.
    pub fn seed_image(&self, url: &str, public_id: &str) {
        let now = Utc::now();
        *self.section.lock().unwrap() = Some(HeroSection {
            title: crate::modules::hero::domain::default_title(),
            subtitle: crate::modules::hero::domain::default_subtitle(),
            background_image_url: Some(url.to_string()),
            background_image_public_id: Some(public_id.to_string()),
            created_at: now,
            updated_at: now,
        });
    }

    fn modify(
        &self,
        change: impl FnOnce(&mut HeroSection),
    ) -> Result<HeroSection, HeroRepositoryError> {
        let mut guard = self.section.lock().unwrap();
        let section = guard
            .as_mut()
            .ok_or_else(|| HeroRepositoryError::DatabaseError("no hero row".to_string()))?;
        change(section);
        section.updated_at = Utc::now();
        Ok(section.clone())
    }
}

#[async_trait]
impl HeroRepository for InMemoryHeroRepository {
    async fn find(&self) -> Result<Option<HeroSection>, HeroRepositoryError> {
        Ok(self.current())
    }

    async fn insert_if_absent(
        &self,
        title: BilingualText,
        subtitle: BilingualText,
    ) -> Result<HeroSection, HeroRepositoryError> {
        let mut guard = self.section.lock().unwrap();
        let section = guard.get_or_insert_with(|| {
            let now = Utc::now();
            HeroSection {
                title,
                subtitle,
                background_image_url: None,
                background_image_public_id: None,
                created_at: now,
                updated_at: now,
            }
        });
        Ok(section.clone())
    }

    async fn update_text(
        &self,
        title: Option<BilingualText>,
        subtitle: Option<BilingualText>,
    ) -> Result<HeroSection, HeroRepositoryError> {
        self.modify(|section| {
            if let Some(title) = title {
                section.title = title;
            }
            if let Some(subtitle) = subtitle {
                section.subtitle = subtitle;
            }
        })
    }

    async fn set_background_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<HeroSection, HeroRepositoryError> {
        self.modify(|section| {
            let (url, public_id) = split_asset(image);
            section.background_image_url = url;
            section.background_image_public_id = public_id;
        })
    }
}

// ---------------------------------------------------------------- contact

#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    info: Arc<Mutex<Option<ContactInfo>>>,
    fail: bool,
}

impl InMemoryContactRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ContactRepositoryError> {
        if self.fail {
            return Err(ContactRepositoryError::DatabaseError(OFFLINE.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find(&self) -> Result<Option<ContactInfo>, ContactRepositoryError> {
        self.check()?;
        Ok(self.info.lock().unwrap().clone())
    }

    async fn insert_if_absent(&self) -> Result<ContactInfo, ContactRepositoryError> {
        self.check()?;
        let mut guard = self.info.lock().unwrap();
        let info = guard.get_or_insert_with(|| {
            let now = Utc::now();
            ContactInfo {
                email: String::new(),
                name: String::new(),
                instagram_handle: String::new(),
                created_at: now,
                updated_at: now,
            }
        });
        Ok(info.clone())
    }

    async fn update(
        &self,
        changes: UpdateContactCommand,
    ) -> Result<ContactInfo, ContactRepositoryError> {
        self.check()?;
        let mut guard = self.info.lock().unwrap();
        let info = guard
            .as_mut()
            .ok_or_else(|| ContactRepositoryError::DatabaseError("no contact row".to_string()))?;
        if let Some(email) = changes.email {
            info.email = email;
        }
        if let Some(name) = changes.name {
            info.name = name;
        }
        if let Some(handle) = changes.instagram_handle {
            info.instagram_handle = handle;
        }
        info.updated_at = Utc::now();
        Ok(info.clone())
    }
}

// ---------------------------------------------------------------- lists

/// Rows plus a clock; every list repository below wraps one of these.
struct Table<T> {
    rows: Vec<T>,
    sequence: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sequence: 0,
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryExperienceRepository {
    table: Arc<Mutex<Table<ExperienceItem>>>,
}

impl InMemoryExperienceRepository {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn list(&self) -> Result<Vec<ExperienceItem>, ExperienceRepositoryError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceItem>, ExperienceRepositoryError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(
        &self,
        item: NewExperience,
    ) -> Result<ExperienceItem, ExperienceRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = ExperienceItem {
            id: Uuid::new_v4(),
            name: item.name,
            date: item.date,
            in_progress: item.in_progress,
            display_order: item.display_order,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<ExperienceItem, ExperienceRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if let Some(name) = changes.name {
            row.name = name;
        }
        match changes.date {
            PatchField::Unset => {}
            PatchField::Null => row.date = None,
            PatchField::Value(date) => row.date = Some(date),
        }
        if let Some(in_progress) = changes.in_progress {
            row.in_progress = in_progress;
        }
        if let Some(order) = changes.display_order {
            row.display_order = order;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryTestimonialRepository {
    table: Arc<Mutex<Table<TestimonialItem>>>,
}

impl InMemoryTestimonialRepository {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn list(&self) -> Result<Vec<TestimonialItem>, TestimonialRepositoryError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TestimonialItem>, TestimonialRepositoryError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(
        &self,
        item: NewTestimonial,
    ) -> Result<TestimonialItem, TestimonialRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = TestimonialItem {
            id: Uuid::new_v4(),
            name: item.name,
            comment: item.comment,
            activity_package: item.activity_package,
            display_order: item.display_order,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: TestimonialChanges,
    ) -> Result<TestimonialItem, TestimonialRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(TestimonialRepositoryError::NotFound)?;

        if let Some(name) = changes.name {
            row.name = name;
        }
        if let Some(comment) = changes.comment {
            row.comment = comment;
        }
        match changes.activity_package {
            PatchField::Unset => {}
            PatchField::Null => row.activity_package = None,
            PatchField::Value(package) => row.activity_package = Some(package),
        }
        if let Some(order) = changes.display_order {
            row.display_order = order;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(TestimonialRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryJourneyRepository {
    table: Arc<Mutex<Table<JourneyItem>>>,
}

impl InMemoryJourneyRepository {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl JourneyRepository for InMemoryJourneyRepository {
    async fn list(&self) -> Result<Vec<JourneyItem>, JourneyRepositoryError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyItem>, JourneyRepositoryError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(&self, item: NewJourneyItem) -> Result<JourneyItem, JourneyRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = JourneyItem {
            id: Uuid::new_v4(),
            age: item.age,
            title: item.title,
            body: item.body,
            display_order: item.display_order,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: JourneyChanges,
    ) -> Result<JourneyItem, JourneyRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(JourneyRepositoryError::NotFound)?;

        if let Some(age) = changes.age {
            row.age = age;
        }
        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(body) = changes.body {
            row.body = body;
        }
        if let Some(order) = changes.display_order {
            row.display_order = order;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(JourneyRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGalleryRepository {
    table: Arc<Mutex<Table<GalleryImage>>>,
    fail_writes: bool,
}

impl InMemoryGalleryRepository {
    /// Reads succeed, inserts fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl GalleryRepository for InMemoryGalleryRepository {
    async fn list(&self) -> Result<Vec<GalleryImage>, GalleryRepositoryError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, GalleryRepositoryError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(&self, image: NewGalleryImage) -> Result<GalleryImage, GalleryRepositoryError> {
        if self.fail_writes {
            return Err(GalleryRepositoryError::DatabaseError(OFFLINE.to_string()));
        }
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = GalleryImage {
            id: Uuid::new_v4(),
            image_url: image.asset.url,
            public_id: image.asset.public_id,
            caption: image.caption,
            display_order: image.display_order,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: GalleryChanges,
    ) -> Result<GalleryImage, GalleryRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let now = stamp(&mut table.sequence);
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(GalleryRepositoryError::NotFound)?;

        if let Some(caption) = changes.caption {
            row.caption = caption;
        }
        if let Some(order) = changes.display_order {
            row.display_order = order;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), GalleryRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(GalleryRepositoryError::NotFound);
        }
        Ok(())
    }
}
