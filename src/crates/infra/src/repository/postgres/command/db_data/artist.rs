use domain::artist::{Artist, ArtistDraft};
use domain::value::ArtistId;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Default)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: bool,
    pub label: Option<String>,
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Artist {
    fn from(model: Model) -> Self {
        Artist {
            id: ArtistId::from(model.id),
            name: model.name,
            bio: model.bio,
            country: model.country,
            genre: model.genre,
            formed_year: model.formed_year,
            is_active: model.is_active,
            label: model.label,
            photo: model.photo,
        }
    }
}

impl From<ArtistDraft> for ActiveModel {
    fn from(draft: ArtistDraft) -> Self {
        Self {
            id: NotSet, // assigned by the store
            name: Set(draft.name),
            bio: Set(draft.bio),
            country: Set(draft.country),
            genre: Set(draft.genre),
            formed_year: Set(draft.formed_year),
            is_active: Set(draft.is_active),
            label: Set(draft.label),
            photo: Set(draft.photo),
        }
    }
}

impl From<&Artist> for ActiveModel {
    fn from(artist: &Artist) -> Self {
        Self {
            id: Set(artist.id.as_i64()),
            name: Set(artist.name.clone()),
            bio: Set(artist.bio.clone()),
            country: Set(artist.country.clone()),
            genre: Set(artist.genre.clone()),
            formed_year: Set(artist.formed_year),
            is_active: Set(artist.is_active),
            label: Set(artist.label.clone()),
            photo: Set(artist.photo.clone()),
        }
    }
}
