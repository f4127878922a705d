use crate::value::UserId;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// 用户领域错误
#[derive(Error, Debug)]
pub enum UserError {
    #[error("invalid user or password: {0}")]
    InvalidUserOrPassword(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 用户聚合根
///
/// 有权访问目录的个体。`password` 保存 bcrypt 散列，绝不保存明文。
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// Credentials for a user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> Result<u64, UserError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
    async fn insert(&self, draft: UserDraft) -> Result<User, UserError>;
}
