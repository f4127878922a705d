use super::db_data::audiotrack::{self, ActiveModel};
use async_trait::async_trait;
use domain::audiotrack::{Audiotrack, AudiotrackDraft, AudiotrackError, AudiotrackRepository};
use domain::value::AudiotrackId;
use sea_orm::sea_query::Expr;
use sea_orm::*;

#[derive(Clone)]
pub struct AudiotrackRepositoryImpl {
    db: DatabaseConnection,
}

impl AudiotrackRepositoryImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AudiotrackRepository for AudiotrackRepositoryImpl {
    async fn insert(&self, draft: AudiotrackDraft) -> Result<Audiotrack, AudiotrackError> {
        let model = ActiveModel::from(draft)
            .insert(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        Ok(model.into())
    }

    async fn by_id(&self, id: AudiotrackId) -> Result<Option<Audiotrack>, AudiotrackError> {
        let result = audiotrack::Entity::find_by_id(id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        Ok(result.map(Into::into))
    }

    async fn update(&self, track: Audiotrack) -> Result<Audiotrack, AudiotrackError> {
        let existing = audiotrack::Entity::find_by_id(track.id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        if existing.is_none() {
            return Err(AudiotrackError::NotFound(track.id.as_i64()));
        }
        let model = ActiveModel::from(&track)
            .update(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        Ok(model.into())
    }

    async fn set_photo(&self, id: AudiotrackId, photo: &str) -> Result<(), AudiotrackError> {
        let result = audiotrack::Entity::update_many()
            .col_expr(audiotrack::Column::Photo, Expr::value(photo))
            .filter(audiotrack::Column::Id.eq(id.as_i64()))
            .exec(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        if result.rows_affected == 0 {
            return Err(AudiotrackError::NotFound(id.as_i64()));
        }
        Ok(())
    }

    async fn delete(&self, id: AudiotrackId) -> Result<(), AudiotrackError> {
        let result = audiotrack::Entity::delete_by_id(id.as_i64())
            .exec(&self.db)
            .await
            .map_err(|e| AudiotrackError::DbErr(e.to_string()))?;
        if result.rows_affected == 0 {
            return Err(AudiotrackError::NotFound(id.as_i64()));
        }
        Ok(())
    }
}
