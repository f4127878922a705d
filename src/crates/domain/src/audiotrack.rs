use crate::value::AudiotrackId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudiotrackError {
    #[error("audiotrack not found: {0}")]
    NotFound(i64),
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 音轨聚合根
///
/// `artist` 是自由文本的表演者名称，不是外键。`duration` 单位为秒。
#[derive(Debug, Clone, PartialEq)]
pub struct Audiotrack {
    pub id: AudiotrackId,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: i32,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

/// Field set for a track that has not been persisted yet.
#[derive(Debug, Clone, Default)]
pub struct AudiotrackDraft {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: i32,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

#[async_trait]
pub trait AudiotrackRepository: Send + Sync {
    /// Inserts the draft and returns the persisted row with its assigned id.
    async fn insert(&self, draft: AudiotrackDraft) -> Result<Audiotrack, AudiotrackError>;
    async fn by_id(&self, id: AudiotrackId) -> Result<Option<Audiotrack>, AudiotrackError>;
    /// Overwrites every column of the row identified by `track.id`.
    async fn update(&self, track: Audiotrack) -> Result<Audiotrack, AudiotrackError>;
    /// Sets only the photo column.
    async fn set_photo(&self, id: AudiotrackId, photo: &str) -> Result<(), AudiotrackError>;
    /// Removes the row; `NotFound` when no row matched.
    async fn delete(&self, id: AudiotrackId) -> Result<(), AudiotrackError>;
}
