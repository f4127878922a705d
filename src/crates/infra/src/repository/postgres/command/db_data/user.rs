use chrono::Utc;
use domain::user::{User, UserDraft};
use domain::value::UserId;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt 散列
    pub password: String,
    pub is_admin: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: UserId::from(model.id),
            username: model.username,
            password: model.password,
            is_admin: model.is_admin,
            created_at: model.created_at,
        }
    }
}

impl From<UserDraft> for ActiveModel {
    fn from(draft: UserDraft) -> Self {
        Self {
            id: NotSet, // assigned by the store
            username: Set(draft.username),
            password: Set(draft.password),
            is_admin: Set(draft.is_admin),
            created_at: Set(Utc::now().naive_utc()),
        }
    }
}
