use crate::repository::postgres::command::db_data::audiotrack;
use application::query::dao::AudiotrackDao;
use application::query::QueryError;
use async_trait::async_trait;
use domain::audiotrack::Audiotrack;
use sea_orm::*;

#[derive(Clone)]
pub struct AudiotrackDaoImpl {
    db: DatabaseConnection,
}

impl AudiotrackDaoImpl {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AudiotrackDao for AudiotrackDaoImpl {
    /// 按 id 升序分页，与艺术家侧一致
    async fn get_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Audiotrack>, u64), QueryError> {
        let total = audiotrack::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        let rows = audiotrack::Entity::find()
            .order_by_asc(audiotrack::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Audiotrack>, QueryError> {
        let result = audiotrack::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| QueryError::DbError(e.to_string()))?;
        Ok(result.map(Into::into))
    }
}
