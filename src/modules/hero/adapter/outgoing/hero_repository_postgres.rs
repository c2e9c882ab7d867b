use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr,
    EntityTrait, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model, SINGLETON_ID};
use crate::modules::hero::application::ports::outgoing::{HeroRepository, HeroRepositoryError};
use crate::modules::hero::domain::HeroSection;
use crate::modules::media::domain::StoredAsset;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone)]
pub struct HeroRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HeroRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HeroRepository for HeroRepositoryPostgres {
    async fn find(&self) -> Result<Option<HeroSection>, HeroRepositoryError> {
        Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn insert_if_absent(
        &self,
        title: BilingualText,
        subtitle: BilingualText,
    ) -> Result<HeroSection, HeroRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            title: Set(title.to_json_value()),
            subtitle: Set(subtitle.to_json_value()),
            background_image_url: Set(None),
            background_image_public_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Entity::insert(active)
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)?;

        self.find().await?.ok_or_else(|| {
            HeroRepositoryError::DatabaseError("hero section missing after insert".to_string())
        })
    }

    async fn update_text(
        &self,
        title: Option<BilingualText>,
        subtitle: Option<BilingualText>,
    ) -> Result<HeroSection, HeroRepositoryError> {
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            title: title.map_or(NotSet, |t| Set(t.to_json_value())),
            subtitle: subtitle.map_or(NotSet, |s| Set(s.to_json_value())),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(db_err)?;
        to_domain(model)
    }

    async fn set_background_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<HeroSection, HeroRepositoryError> {
        let (url, public_id) = match image {
            Some(asset) => (Some(asset.url), Some(asset.public_id)),
            None => (None, None),
        };

        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            background_image_url: Set(url),
            background_image_public_id: Set(public_id),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(db_err)?;
        to_domain(model)
    }
}

fn to_domain(model: Model) -> Result<HeroSection, HeroRepositoryError> {
    let corrupt =
        |e: serde_json::Error| HeroRepositoryError::DatabaseError(format!("corrupt text column: {e}"));

    Ok(HeroSection {
        title: BilingualText::from_json_value(model.title).map_err(corrupt)?,
        subtitle: BilingualText::from_json_value(model.subtitle).map_err(corrupt)?,
        background_image_url: model.background_image_url,
        background_image_public_id: model.background_image_public_id,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn db_err(e: DbErr) -> HeroRepositoryError {
    HeroRepositoryError::DatabaseError(e.to_string())
}
