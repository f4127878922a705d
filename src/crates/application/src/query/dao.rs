use crate::query::QueryError;
use async_trait::async_trait;
use domain::artist::Artist;
use domain::audiotrack::Audiotrack;

#[async_trait]
pub trait ArtistDao: Send + Sync {
    /// 按 id 升序取一页，返回 (行, 总数)
    async fn get_page(&self, offset: u64, limit: u64) -> Result<(Vec<Artist>, u64), QueryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Artist>, QueryError>;
}

#[async_trait]
pub trait AudiotrackDao: Send + Sync {
    /// 按 id 升序取一页，返回 (行, 总数)
    async fn get_page(&self, offset: u64, limit: u64)
        -> Result<(Vec<Audiotrack>, u64), QueryError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Audiotrack>, QueryError>;
}
