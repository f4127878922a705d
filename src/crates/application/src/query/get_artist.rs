use crate::query::dao::ArtistDao;
use crate::query::dto::ArtistView;
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetArtist {
    artist_dao: Arc<dyn ArtistDao>,
}

impl GetArtist {
    pub fn new(artist_dao: Arc<dyn ArtistDao>) -> Self {
        Self { artist_dao }
    }

    pub async fn handle(&self, id: i64) -> Result<Option<ArtistView>, QueryError> {
        Ok(self.artist_dao.get_by_id(id).await?.map(ArtistView::from))
    }
}
