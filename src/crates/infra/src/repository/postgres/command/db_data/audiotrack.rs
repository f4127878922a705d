use domain::audiotrack::{Audiotrack, AudiotrackDraft};
use domain::value::AudiotrackId;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "audiotracks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// 自由文本的表演者名称，不是外键
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: i32,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Audiotrack {
    fn from(model: Model) -> Self {
        Audiotrack {
            id: AudiotrackId::from(model.id),
            title: model.title,
            artist: model.artist,
            album: model.album,
            duration: model.duration,
            genre: model.genre,
            play_count: model.play_count,
            release_year: model.release_year,
            photo: model.photo,
        }
    }
}

impl From<AudiotrackDraft> for ActiveModel {
    fn from(draft: AudiotrackDraft) -> Self {
        Self {
            id: NotSet, // assigned by the store
            title: Set(draft.title),
            artist: Set(draft.artist),
            album: Set(draft.album),
            duration: Set(draft.duration),
            genre: Set(draft.genre),
            play_count: Set(draft.play_count),
            release_year: Set(draft.release_year),
            photo: Set(draft.photo),
        }
    }
}

impl From<&Audiotrack> for ActiveModel {
    fn from(track: &Audiotrack) -> Self {
        Self {
            id: Set(track.id.as_i64()),
            title: Set(track.title.clone()),
            artist: Set(track.artist.clone()),
            album: Set(track.album.clone()),
            duration: Set(track.duration),
            genre: Set(track.genre.clone()),
            play_count: Set(track.play_count),
            release_year: Set(track.release_year),
            photo: Set(track.photo.clone()),
        }
    }
}
