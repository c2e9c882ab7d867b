use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::admins::{self, ActiveModel, Column, Entity};
use crate::auth::application::ports::outgoing::{AdminRepository, AdminRepositoryError};
use crate::auth::domain::Admin;

#[derive(Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        let model = Entity::find()
            .filter(Column::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_admin))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_admin))
    }

    async fn any_exists(&self) -> Result<bool, AdminRepositoryError> {
        let model = Entity::find().one(&*self.db).await.map_err(map_db_err)?;
        Ok(model.is_some())
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Admin, AdminRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_lowercase()),
            password_hash: Set(password_hash.to_string()),
            reset_token_hash: Set(None),
            reset_token_expires_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_email_error)?;

        Ok(model_to_admin(result))
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AdminRepositoryError> {
        let model = ActiveModel {
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AdminRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn store_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AdminRepositoryError> {
        let model = ActiveModel {
            reset_token_hash: Set(Some(token_hash.to_string())),
            reset_token_expires_at: Set(Some(expires_at.fixed_offset())),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AdminRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Admin>, AdminRepositoryError> {
        let model = Entity::find()
            .filter(Column::ResetTokenHash.eq(token_hash))
            .filter(Column::ResetTokenExpiresAt.gt(now.fixed_offset()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_admin))
    }

    async fn redeem_reset_token(
        &self,
        id: Uuid,
        token_hash: &str,
        now: DateTime<Utc>,
        new_password_hash: &str,
    ) -> Result<bool, AdminRepositoryError> {
        let model = ActiveModel {
            password_hash: Set(new_password_hash.to_string()),
            reset_token_hash: Set(None),
            reset_token_expires_at: Set(None),
            ..Default::default()
        };

        // The token conditions make this a compare-and-swap
        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(Column::ResetTokenHash.eq(token_hash))
            .filter(Column::ResetTokenExpiresAt.gt(now.fixed_offset()))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }
}

fn model_to_admin(model: admins::Model) -> Admin {
    Admin {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
    }
}

fn map_email_error(e: DbErr) -> AdminRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        AdminRepositoryError::EmailAlreadyExists
    } else {
        AdminRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> AdminRepositoryError {
    AdminRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn admin_model(id: Uuid, email: &str) -> admins::Model {
        let now = Utc::now().fixed_offset();
        admins::Model {
            id,
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=4096,t=3,p=1$salt$hash".to_string(),
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_find_by_email_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(id, "admin@example.com")]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let admin = repo.find_by_email("Admin@Example.com").await.unwrap().unwrap();

        assert_eq!(admin.id, id);
        assert_eq!(admin.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<admins::Model>::new()])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        assert!(repo.find_by_email("x@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_any_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(Uuid::new_v4(), "a@b.com")]])
            .append_query_results(vec![Vec::<admins::Model>::new()])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        assert!(repo.any_exists().await.unwrap());
        assert!(!repo.any_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_returns_admin() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin_model(id, "admin@example.com")]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let admin = repo.create("admin@example.com", "hash").await.unwrap();

        assert_eq!(admin.id, id);
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"admins_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo.create("admin@example.com", "hash").await;

        assert_eq!(result, Err(AdminRepositoryError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn test_update_password_missing_admin() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_result(0)])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_password(Uuid::new_v4(), "hash").await;

        assert_eq!(result, Err(AdminRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_store_reset_token() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_result(1)])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .store_reset_token(Uuid::new_v4(), "abc", Utc::now() + Duration::hours(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_redeem_reports_lost_race() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec_result(1), exec_result(0)])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let id = Uuid::new_v4();

        assert!(repo
            .redeem_reset_token(id, "abc", Utc::now(), "new-hash")
            .await
            .unwrap());
        assert!(!repo
            .redeem_reset_token(id, "abc", Utc::now(), "new-hash")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_database_error_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AdminRepositoryError::DatabaseError(_))));
    }
}
