use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::testimonial::application::ports::outgoing::{
    NewTestimonial, TestimonialChanges, TestimonialRepository, TestimonialRepositoryError,
};
use crate::modules::testimonial::domain::TestimonialItem;
use crate::modules::translation::domain::BilingualText;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn list(&self) -> Result<Vec<TestimonialItem>, TestimonialRepositoryError> {
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
    ) -> Result<Option<TestimonialItem>, TestimonialRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn create(
        &self,
        item: NewTestimonial,
    ) -> Result<TestimonialItem, TestimonialRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(item.name),
            comment: Set(item.comment.to_json_value()),
            activity_package: Set(item.activity_package.map(|p| p.to_json_value())),
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
        changes: TestimonialChanges,
    ) -> Result<TestimonialItem, TestimonialRepositoryError> {
        let mut active = <ActiveModel as Default>::default();
        active.id = Set(id);

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(comment) = changes.comment {
            active.comment = Set(comment.to_json_value());
        }
        match changes.activity_package {
            PatchField::Unset => {}
            PatchField::Null => active.activity_package = Set(None),
            PatchField::Value(package) => {
                active.activity_package = Set(Some(package.to_json_value()))
            }
        }
        active.display_order = changes.display_order.map_or(NotSet, Set);

        let model = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TestimonialRepositoryError::NotFound,
            other => db_err(other),
        })?;
        to_domain(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err)?;

        match result.rows_affected {
            0 => Err(TestimonialRepositoryError::NotFound),
            _ => Ok(()),
        }
    }
}

fn to_domain(model: Model) -> Result<TestimonialItem, TestimonialRepositoryError> {
    let corrupt = |e: serde_json::Error| {
        TestimonialRepositoryError::DatabaseError(format!("corrupt testimonial row: {e}"))
    };

    Ok(TestimonialItem {
        id: model.id,
        name: model.name,
        comment: BilingualText::from_json_value(model.comment).map_err(corrupt)?,
        activity_package: model
            .activity_package
            .map(BilingualText::from_json_value)
            .transpose()
            .map_err(corrupt)?,
        display_order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}
