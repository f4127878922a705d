use crate::repository::postgres::command::db_data::artist;
use application::query::dao::ArtistDao;
use application::query::QueryError;
use async_trait::async_trait;
use domain::artist::Artist;
use sea_orm::*;

#[derive(Clone)]
pub struct ArtistDaoImpl {
    db: DatabaseConnection,
}

impl ArtistDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistDao for ArtistDaoImpl {
    /// 按 id 升序分页；新插入的行总是排在末尾，翻页顺序稳定
    async fn get_page(&self, offset: u64, limit: u64) -> Result<(Vec<Artist>, u64), QueryError> {
        let total = artist::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        let rows = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Artist>, QueryError> {
        let result = artist::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(result.map(Into::into))
    }
}
