use crate::value::ArtistId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtistError {
    #[error("artist not found: {0}")]
    NotFound(i64),
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 艺术家聚合根
///
/// 目录中的表演者条目。`photo` 只会由照片暂存器或显式更新写入，
/// 始终是 /images/artists/ 下的公开路径。
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: bool,
    pub label: Option<String>,
    pub photo: Option<String>,
}

/// Field set for an artist that has not been persisted yet. The store
/// assigns the id on insert.
#[derive(Debug, Clone, Default)]
pub struct ArtistDraft {
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: bool,
    pub label: Option<String>,
    pub photo: Option<String>,
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Inserts the draft and returns the persisted row with its assigned id.
    async fn insert(&self, draft: ArtistDraft) -> Result<Artist, ArtistError>;
    async fn by_id(&self, id: ArtistId) -> Result<Option<Artist>, ArtistError>;
    /// Overwrites every column of the row identified by `artist.id`.
    async fn update(&self, artist: Artist) -> Result<Artist, ArtistError>;
    /// Sets only the photo column.
    async fn set_photo(&self, id: ArtistId, photo: &str) -> Result<(), ArtistError>;
    /// Removes the row; `NotFound` when no row matched.
    async fn delete(&self, id: ArtistId) -> Result<(), ArtistError>;
}
