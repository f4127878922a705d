use application::command::shared::{PhotoKind, PhotoStore};
use application::error::AppError;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// 把上传的封面写到本地 images 目录下
///
/// Files land at `{root}/{kind_dir}/{filename}` and are published as
/// `/images/{kind_dir}/{filename}`. Same-named uploads overwrite each other
/// (last write wins), matching the legacy behavior.
#[derive(Clone)]
pub struct LocalPhotoStore {
    root: PathBuf,
}

impl LocalPhotoStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl PhotoStore for LocalPhotoStore {
    async fn store(
        &self,
        kind: PhotoKind,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        // only the final path component survives; an uploaded name must not
        // escape the per-kind directory
        let filename = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::Storage(format!("invalid file name: {}", filename)))?
            .to_string();

        let dir = self.root.join(kind.dir());
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Storage(format!("create {}: {}", dir.display(), e)))?;

        let target = dir.join(&filename);
        fs::write(&target, bytes)
            .map_err(|e| AppError::Storage(format!("write {}: {}", target.display(), e)))?;

        // presence check, the caller relies on it before linking the record
        if !target.exists() {
            return Err(AppError::Storage(format!(
                "file missing after write: {}",
                target.display()
            )));
        }

        Ok(format!("/images/{}/{}", kind.dir(), filename))
    }
}
