use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model, SINGLETON_ID};
use crate::modules::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::modules::about::domain::AboutSection;
use crate::modules::media::domain::StoredAsset;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn find(&self) -> Result<Option<AboutSection>, AboutRepositoryError> {
        Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn insert_if_absent(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            content: Set(content.to_json_value()),
            profile_image_url: Set(None),
            profile_image_public_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Entity::insert(active)
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)?;

        self.find().await?.ok_or_else(|| {
            AboutRepositoryError::DatabaseError("about section missing after insert".to_string())
        })
    }

    async fn save_content(
        &self,
        content: BilingualText,
    ) -> Result<AboutSection, AboutRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            content: Set(content.to_json_value()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_column(Column::Content)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(db_err)?;

        to_domain(model)
    }

    async fn set_profile_image(
        &self,
        image: Option<StoredAsset>,
    ) -> Result<AboutSection, AboutRepositoryError> {
        let (url, public_id) = match image {
            Some(asset) => (Some(asset.url), Some(asset.public_id)),
            None => (None, None),
        };

        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            profile_image_url: Set(url),
            profile_image_public_id: Set(public_id),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(db_err)?;
        to_domain(model)
    }
}

fn to_domain(model: Model) -> Result<AboutSection, AboutRepositoryError> {
    let content = BilingualText::from_json_value(model.content)
        .map_err(|e| AboutRepositoryError::DatabaseError(format!("corrupt content column: {e}")))?;

    Ok(AboutSection {
        content,
        profile_image_url: model.profile_image_url,
        profile_image_public_id: model.profile_image_public_id,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}
