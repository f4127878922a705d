use crate::auth::AuthConfig;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::RwLock;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    database_url: String,
    jwt_secret_key: String,
    jwt_expire_secs: i64,
    salt_cost: i32,
    /// 允许跨域访问的前端来源
    cors_origin: String,
    /// 图片配置
    images: RawImagesConfig,
    /// 服务器配置
    server: RawServerConfig,
}

/// 图片配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawImagesConfig {
    /// 上传图片的根目录，公开路径 /images 映射到这里
    root_dir: String,
}

impl Default for RawImagesConfig {
    fn default() -> Self {
        Self {
            root_dir: "./images".to_string(),
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            jwt_secret_key: "secret".to_string(),
            jwt_expire_secs: 3600,
            salt_cost: 10,
            cors_origin: "http://localhost:5173".to_string(),
            images: RawImagesConfig::default(),
            server: RawServerConfig::default(),
        }
    }
}

/// 图片配置
#[derive(Debug, Clone)]
pub struct ImagesConfig {
    /// 上传图片的根目录
    pub root_dir: String,
}

impl ImagesConfig {
    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.root_dir)
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    pub database_url: Arc<RwLock<String>>,
    pub jwt_secret_key: Arc<RwLock<String>>,
    pub jwt_expire_secs: Arc<AtomicU64>,
    pub salt_cost: Arc<AtomicU64>,
    pub cors_origin: Arc<RwLock<String>>,
    pub images: Arc<RwLock<ImagesConfig>>,
    pub server: Arc<RwLock<ServerConfig>>,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        let images_config = ImagesConfig {
            root_dir: data.images.root_dir,
        };
        let server_config = ServerConfig {
            host: data.server.host,
            port: data.server.port,
        };
        AppConfigImpl {
            database_url: Arc::new(RwLock::new(data.database_url)),
            jwt_secret_key: Arc::new(RwLock::new(data.jwt_secret_key)),
            jwt_expire_secs: Arc::new(AtomicU64::new(data.jwt_expire_secs as u64)),
            salt_cost: Arc::new(AtomicU64::new(data.salt_cost as u64)),
            cors_origin: Arc::new(RwLock::new(data.cors_origin)),
            images: Arc::new(RwLock::new(images_config)),
            server: Arc::new(RwLock::new(server_config)),
        }
    }

    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        let app_config = AppConfigImpl::new(raw);
        Ok(app_config)
    }

    pub fn database_url(&self) -> String {
        let cfg_val = self.database_url.read().unwrap();
        (*cfg_val).clone()
    }

    pub fn cors_origin(&self) -> String {
        let cfg_val = self.cors_origin.read().unwrap();
        (*cfg_val).clone()
    }

    pub fn images(&self) -> ImagesConfig {
        let cfg_val = self.images.read().unwrap();
        cfg_val.clone()
    }

    pub fn server(&self) -> ServerConfig {
        let cfg_val = self.server.read().unwrap();
        cfg_val.clone()
    }
}

impl AuthConfig for AppConfigImpl {
    fn jwt_secret(&self) -> &str {
        static CACHED_SECRET: OnceLock<String> = OnceLock::new();

        let secret_string = {
            let cfg_val = self.jwt_secret_key.read().unwrap();
            cfg_val.clone()
        };

        CACHED_SECRET.get_or_init(|| secret_string)
    }

    fn jwt_expire_secs(&self) -> i64 {
        self.jwt_expire_secs.load(Ordering::SeqCst) as i64
    }

    fn salt_cost(&self) -> i32 {
        self.salt_cost.load(Ordering::SeqCst) as i32
    }
}
