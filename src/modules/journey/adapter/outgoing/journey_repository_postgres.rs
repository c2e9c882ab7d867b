use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::journey::application::ports::outgoing::{
    JourneyChanges, JourneyRepository, JourneyRepositoryError, NewJourneyItem,
};
use crate::modules::journey::domain::JourneyItem;
use crate::modules::translation::domain::BilingualText;

#[derive(Debug, Clone)]
pub struct JourneyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JourneyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JourneyRepository for JourneyRepositoryPostgres {
    async fn list(&self) -> Result<Vec<JourneyItem>, JourneyRepositoryError> {
        Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<JourneyItem>, JourneyRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn create(&self, item: NewJourneyItem) -> Result<JourneyItem, JourneyRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            age: Set(item.age),
            title: Set(item.title.to_json_value()),
            body: Set(item.body.to_json_value()),
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
        changes: JourneyChanges,
    ) -> Result<JourneyItem, JourneyRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            age: changes.age.map_or(NotSet, Set),
            title: changes.title.map_or(NotSet, |t| Set(t.to_json_value())),
            body: changes.body.map_or(NotSet, |b| Set(b.to_json_value())),
            display_order: changes.display_order.map_or(NotSet, Set),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => JourneyRepositoryError::NotFound,
            other => db_err(other),
        })?;
        to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), JourneyRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(JourneyRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn to_domain(model: Model) -> Result<JourneyItem, JourneyRepositoryError> {
    let corrupt = |e: serde_json::Error| {
        JourneyRepositoryError::DatabaseError(format!("corrupt journey row: {e}"))
    };

    Ok(JourneyItem {
        id: model.id,
        age: model.age,
        title: BilingualText::from_json_value(model.title).map_err(corrupt)?,
        body: BilingualText::from_json_value(model.body).map_err(corrupt)?,
        display_order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn db_err(e: DbErr) -> JourneyRepositoryError {
    JourneyRepositoryError::DatabaseError(e.to_string())
}
