use std::sync::Arc;

use crate::error::AppError;
use domain::user::{User, UserDraft, UserRepository};

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
    fn verify(&self, pwd: &str, hashed_pwd: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct UserClaims {
    pub user_name: String, // user name
    pub is_admin: bool,    // is admin
}

impl From<&User> for UserClaims {
    fn from(user: &User) -> Self {
        Self {
            user_name: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}

pub trait TokenService: Send + Sync {
    fn issue(&self, claims: &UserClaims) -> Result<String, AppError>;
    fn verify(&self, token: &str) -> Result<UserClaims, AppError>;
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    token_svc: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        token_svc: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            token_svc,
        }
    }

    /// Login with username and password, returns JWT token
    pub async fn login(&self, username: &str, pwd: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthError("invalid username".to_string()))?;
        self.hasher.verify(pwd, &user.password)?;
        self.token_svc.issue(&UserClaims::from(&user))
    }

    /// Create admin user if no users exist
    pub async fn create_admin(&self, username: &str, pwd: &str) -> Result<(), AppError> {
        if self.user_repo.count().await? > 0 {
            return Err(AppError::AuthError(
                "can not create another admin".to_string(),
            ));
        }
        let hashed_pwd = self.hasher.hash(pwd)?;
        self.user_repo
            .insert(UserDraft {
                username: username.to_string(),
                password: hashed_pwd,
                is_admin: true,
            })
            .await?;
        Ok(())
    }
}
