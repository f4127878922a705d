use crate::query::dao::ArtistDao;
use crate::query::dto::ArtistView;
use crate::query::shared::{total_pages, Page, PAGE_SIZE};
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetArtistPage {
    artist_dao: Arc<dyn ArtistDao>,
}

impl GetArtistPage {
    pub fn new(artist_dao: Arc<dyn ArtistDao>) -> Self {
        Self { artist_dao }
    }

    /// Pages are 1-based; anything below 1 is treated as page 1. A page past
    /// the end yields an empty item list, not an error.
    pub async fn handle(&self, page: u64) -> Result<Page<ArtistView>, QueryError> {
        let page = page.max(1);
        let offset = (page - 1) * PAGE_SIZE;
        let (rows, total) = self.artist_dao.get_page(offset, PAGE_SIZE).await?;
        Ok(Page {
            items: rows.into_iter().map(ArtistView::from).collect(),
            current_page: page,
            total_pages: total_pages(total, PAGE_SIZE),
            total_items: total,
        })
    }
}
