use super::db_data::user::{self, ActiveModel};
use async_trait::async_trait;
use domain::user::{User, UserDraft, UserError, UserRepository};
use sea_orm::*;

#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: DatabaseConnection,
}

impl UserRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn count(&self) -> Result<u64, UserError> {
        let count = user::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| UserError::DbErr(e.to_string()))?;
        Ok(count)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| UserError::DbErr(e.to_string()))?;
        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: UserDraft) -> Result<User, UserError> {
        let model = ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(|e| UserError::DbErr(e.to_string()))?;
        Ok(model.into())
    }
}
