use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr,
    EntityTrait, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model, SINGLETON_ID};
use crate::modules::contact::application::ports::incoming::use_cases::UpdateContactCommand;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::modules::contact::domain::ContactInfo;

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn find(&self) -> Result<Option<ContactInfo>, ContactRepositoryError> {
        let model = Entity::find_by_id(SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(to_domain))
    }

    async fn insert_if_absent(&self) -> Result<ContactInfo, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            email: Set(String::new()),
            name: Set(String::new()),
            instagram_handle: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Entity::insert(active)
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)?;

        self.find().await?.ok_or_else(|| {
            ContactRepositoryError::DatabaseError("contact info missing after insert".to_string())
        })
    }

    async fn update(
        &self,
        changes: UpdateContactCommand,
    ) -> Result<ContactInfo, ContactRepositoryError> {
        let active = ActiveModel {
            id: Set(SINGLETON_ID),
            email: changes.email.map_or(NotSet, Set),
            name: changes.name.map_or(NotSet, Set),
            instagram_handle: changes.instagram_handle.map_or(NotSet, Set),
            ..Default::default()
        };

        let model = active.update(&*self.db).await.map_err(db_err)?;
        Ok(to_domain(model))
    }
}

fn to_domain(model: Model) -> ContactInfo {
    ContactInfo {
        email: model.email,
        name: model.name,
        instagram_handle: model.instagram_handle,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
