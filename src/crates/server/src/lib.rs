pub mod api;
pub mod auth;
pub mod consts;
pub mod middleware;
pub mod multipart;
pub mod resources;

use application::auth::AuthService;
use application::command::shared::PhotoStore;
use infra::auth::{AuthConfig, BcryptPasswordHasher, JwtTokenService};
use infra::config::AppConfigImpl;
use infra::repository::postgres::command::UserRepositoryImpl;
use infra::LocalPhotoStore;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::sync::Arc;

pub struct AppState {
    pub app_cfg: AppConfigImpl,
    pub db: DatabaseConnection,
    pub photos: Arc<dyn PhotoStore>,
}

impl AppState {
    pub async fn init_db(db_url: &str) -> DatabaseConnection {
        use log::info;
        use std::time::Duration;

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(90)
            .min_connections(20)
            .connect_timeout(Duration::from_secs(3))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(300))
            .sqlx_logging(false)
            .sqlx_logging_level(log::LevelFilter::Info);

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        let backend = DbBackend::Postgres;
        db.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await
            .expect("Failed to execute test query");

        info!("Database connection pool initialized successfully");
        db
    }

    pub fn new(db: DatabaseConnection, app_cfg: AppConfigImpl) -> Self {
        let photos = Arc::new(LocalPhotoStore::new(app_cfg.images().root()));
        Self {
            app_cfg,
            db,
            photos,
        }
    }
}

pub async fn init_admin_user(state: &AppState) {
    use log::{info, warn};
    use rand::Rng;

    let user_repo: Arc<dyn domain::user::UserRepository> =
        Arc::new(UserRepositoryImpl::new(state.db.clone()));

    match user_repo.count().await {
        Ok(0) => info!("First time setup, will create admin user"),
        Ok(_) => return,
        Err(e) => {
            warn!("Failed to check user count: {}", e);
            return;
        }
    }

    // Generate random password (12 characters)
    let password: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    let hasher: Arc<dyn application::auth::PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(state.app_cfg.salt_cost()));
    let token_svc: Arc<dyn application::auth::TokenService> = Arc::new(JwtTokenService::new(
        state.app_cfg.jwt_secret(),
        state.app_cfg.jwt_expire_secs(),
    ));
    let auth_service = AuthService::new(user_repo, hasher, token_svc);

    match auth_service.create_admin("admin", &password).await {
        Ok(()) => {
            info!("===========================================");
            info!("  Admin user created successfully!");
            info!("  Username: admin");
            info!("  Password: {}", password);
            info!("  Please change the password after login!");
            info!("===========================================");
        }
        Err(e) => warn!("Admin user not created: {}", e),
    }
}
