use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use infra::config::AppConfigImpl;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use migration::{Migrator, MigratorTrait};

use server::middleware::{jwt_verify, other};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 配置日志同时输出到控制台和文件
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}",
        )))
        .build("app.log")
        .unwrap();

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build(
            "stdout",
            Box::new(log4rs::append::console::ConsoleAppender::builder().build()),
        ))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )
        .unwrap();

    log4rs::init_config(config).unwrap();

    let cfg = AppConfigImpl::load().unwrap();
    let server_cfg = cfg.server();
    let db = server::AppState::init_db(&cfg.database_url()).await;

    // 启动时同步数据库结构
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    let app_state = web::Data::new(server::AppState::new(db, cfg));
    server::init_admin_user(&app_state).await;

    HttpServer::new(move || {
        let cors_origin = app_state.app_cfg.cors_origin();
        let images_root = app_state.app_cfg.images().root();
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            // login 不需要 JWT 验证
            .service(server::auth::configure_service())
            // 需要 JWT 验证的路由
            .service(
                web::scope("")
                    .configure(server::api::configure_service)
                    .configure(|cfg| server::resources::configure_service(cfg, &images_root))
                    .wrap(jwt_verify::JwtVerifier {}),
            )
            .wrap(other::cors(&cors_origin))
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
