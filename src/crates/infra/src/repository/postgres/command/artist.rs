use super::db_data::artist::{self, ActiveModel};
use async_trait::async_trait;
use domain::artist::{Artist, ArtistDraft, ArtistError, ArtistRepository};
use domain::value::ArtistId;
use sea_orm::sea_query::Expr;
use sea_orm::*;

#[derive(Clone)]
pub struct ArtistRepositoryImpl {
    db: DatabaseConnection,
}

impl ArtistRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for ArtistRepositoryImpl {
    async fn insert(&self, draft: ArtistDraft) -> Result<Artist, ArtistError> {
        let model = ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        Ok(model.into())
    }

    async fn by_id(&self, id: ArtistId) -> Result<Option<Artist>, ArtistError> {
        let result = artist::Entity::find_by_id(id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        Ok(result.map(Into::into))
    }

    async fn update(&self, artist: Artist) -> Result<Artist, ArtistError> {
        let existing = artist::Entity::find_by_id(artist.id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        if existing.is_none() {
            return Err(ArtistError::NotFound(artist.id.as_i64()));
        }
        let model = ActiveModel::from(&artist)
            .update(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        Ok(model.into())
    }

    async fn set_photo(&self, id: ArtistId, photo: &str) -> Result<(), ArtistError> {
        let result = artist::Entity::update_many()
            .col_expr(artist::Column::Photo, Expr::value(photo))
            .filter(artist::Column::Id.eq(id.as_i64()))
            .exec(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        if result.rows_affected == 0 {
            return Err(ArtistError::NotFound(id.as_i64()));
        }
        Ok(())
    }

    async fn delete(&self, id: ArtistId) -> Result<(), ArtistError> {
        let result = artist::Entity::delete_by_id(id.as_i64())
            .exec(&self.db)
            .await
            .map_err(|e| ArtistError::DbErr(e.to_string()))?;
        if result.rows_affected == 0 {
            return Err(ArtistError::NotFound(id.as_i64()));
        }
        Ok(())
    }
}
