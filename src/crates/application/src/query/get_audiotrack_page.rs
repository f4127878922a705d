use crate::query::dao::AudiotrackDao;
use crate::query::dto::AudiotrackView;
use crate::query::shared::{total_pages, Page, PAGE_SIZE};
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetAudiotrackPage {
    audiotrack_dao: Arc<dyn AudiotrackDao>,
}

impl GetAudiotrackPage {
    pub fn new(audiotrack_dao: Arc<dyn AudiotrackDao>) -> Self {
        Self { audiotrack_dao }
    }

    /// Same paging contract as the artist listing.
    pub async fn handle(&self, page: u64) -> Result<Page<AudiotrackView>, QueryError> {
        let page = page.max(1);
        let offset = (page - 1) * PAGE_SIZE;
        let (rows, total) = self.audiotrack_dao.get_page(offset, PAGE_SIZE).await?;
        Ok(Page {
            items: rows.into_iter().map(AudiotrackView::from).collect(),
            current_page: page,
            total_pages: total_pages(total, PAGE_SIZE),
            total_items: total,
        })
    }
}
