use domain::artist::Artist;
use domain::value::normalize_photo_path;
use serde::Serialize;

/// Artist as sent to clients. The legacy `/img/` photo prefix is rewritten
/// here so every read path goes out normalized.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistView {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: bool,
    pub label: Option<String>,
    pub photo: Option<String>,
}

impl From<Artist> for ArtistView {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id.as_i64(),
            name: artist.name,
            bio: artist.bio,
            country: artist.country,
            genre: artist.genre,
            formed_year: artist.formed_year,
            is_active: artist.is_active,
            label: artist.label,
            photo: artist.photo.as_deref().map(normalize_photo_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value::ArtistId;

    #[test]
    fn test_legacy_photo_normalized_at_read_boundary() {
        let artist = Artist {
            id: ArtistId::from(1),
            name: "Kino".to_string(),
            bio: None,
            country: None,
            genre: None,
            formed_year: None,
            is_active: true,
            label: None,
            photo: Some("/img/x.jpg".to_string()),
        };
        let view = ArtistView::from(artist);
        assert_eq!(view.photo.as_deref(), Some("/images/x.jpg"));
    }
}
