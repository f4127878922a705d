use domain::audiotrack::Audiotrack;
use domain::value::normalize_photo_path;
use serde::Serialize;

/// Audiotrack as sent to clients, photo path normalized.
#[derive(Debug, Clone, Serialize)]
pub struct AudiotrackView {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: i32,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

impl From<Audiotrack> for AudiotrackView {
    fn from(track: Audiotrack) -> Self {
        Self {
            id: track.id.as_i64(),
            title: track.title,
            artist: track.artist,
            album: track.album,
            duration: track.duration,
            genre: track.genre,
            play_count: track.play_count,
            release_year: track.release_year,
            photo: track.photo.as_deref().map(normalize_photo_path),
        }
    }
}
