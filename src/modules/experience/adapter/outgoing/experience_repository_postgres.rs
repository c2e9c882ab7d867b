use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceChanges, ExperienceRepository, ExperienceRepositoryError, NewExperience,
};
use crate::modules::experience::domain::ExperienceItem;
use crate::modules::translation::domain::BilingualText;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceItem>, ExperienceRepositoryError> {
        Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ExperienceItem>, ExperienceRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn create(
        &self,
        item: NewExperience,
    ) -> Result<ExperienceItem, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(item.name.to_json_value()),
            date: Set(item.date),
            in_progress: Set(item.in_progress),
            display_order: Set(item.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(db_err)?;
        to_domain(model)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<ExperienceItem, ExperienceRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            name: changes.name.map_or(NotSet, |n| Set(n.to_json_value())),
            date: match changes.date {
                PatchField::Unset => NotSet,
                PatchField::Null => Set(None),
                PatchField::Value(date) => Set(Some(date)),
            },
            in_progress: changes.in_progress.map_or(NotSet, Set),
            display_order: changes.display_order.map_or(NotSet, Set),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ExperienceRepositoryError::NotFound,
            other => db_err(other),
        })?;
        to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_domain(model: Model) -> Result<ExperienceItem, ExperienceRepositoryError> {
    let name = BilingualText::from_json_value(model.name).map_err(|e| {
        ExperienceRepositoryError::DatabaseError(format!("corrupt name column: {e}"))
    })?;

    Ok(ExperienceItem {
        id: model.id,
        name,
        date: model.date,
        in_progress: model.in_progress,
        display_order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
