use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::gallery::application::ports::outgoing::{
    GalleryChanges, GalleryRepository, GalleryRepositoryError, NewGalleryImage,
};
use crate::modules::gallery::domain::GalleryImage;

#[derive(Debug, Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryRepository for GalleryRepositoryPostgres {
    async fn list(&self) -> Result<Vec<GalleryImage>, GalleryRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, GalleryRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(to_domain))
    }

    async fn create(&self, image: NewGalleryImage) -> Result<GalleryImage, GalleryRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            image_url: Set(image.asset.url),
            public_id: Set(image.asset.public_id),
            caption: Set(image.caption),
            display_order: Set(image.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(db_err)?;
        Ok(to_domain(model))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: GalleryChanges,
    ) -> Result<GalleryImage, GalleryRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            caption: changes.caption.map_or(NotSet, Set),
            display_order: changes.display_order.map_or(NotSet, Set),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => GalleryRepositoryError::NotFound,
            other => db_err(other),
        })?;
        Ok(to_domain(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), GalleryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(GalleryRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_domain(model: Model) -> GalleryImage {
    GalleryImage {
        id: model.id,
        image_url: model.image_url,
        public_id: model.public_id,
        caption: model.caption,
        display_order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: DbErr) -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError(e.to_string())
}
