use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr};
use tracing::error;

use crate::domain::{
    admin::{entities::Admin, ports::AdminRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::admins::{
    ActiveModel as AdminActiveModel, Column as AdminColumn, Entity as AdminEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresAdminRepository {
    pub db: DatabaseConnection,
}

impl PostgresAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AdminRepository for PostgresAdminRepository {
    async fn get_by_email(&self, email: String) -> Result<Option<Admin>, CoreError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get admin by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(Admin::from);

        Ok(admin)
    }

    async fn create_admin(&self, email: String, hashed_password: String) -> Result<Admin, CoreError> {
        let admin = AdminEntity::insert(AdminActiveModel {
            id: NotSet,
            email: Set(email),
            hashed_password: Set(hashed_password),
            created_at: Set(Utc::now().into()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Admin::from)
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::AdminAlreadyExists,
            _ => {
                error!("Failed to create admin: {}", e);
                CoreError::InternalServerError
            }
        })?;

        Ok(admin)
    }
}
