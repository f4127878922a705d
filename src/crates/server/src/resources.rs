use actix_files::Files;
use actix_web::web;
use std::path::Path;

/// 把 /images 映射到上传图片根目录，暂存的封面路径由这里对外可见
pub fn configure_service(cfg: &mut web::ServiceConfig, images_root: &Path) {
    cfg.service(Files::new("/images", images_root));
}
