use crate::query::dao::AudiotrackDao;
use crate::query::dto::AudiotrackView;
use crate::query::QueryError;
use std::sync::Arc;

pub struct GetAudiotrack {
    audiotrack_dao: Arc<dyn AudiotrackDao>,
}

impl GetAudiotrack {
    pub fn new(audiotrack_dao: Arc<dyn AudiotrackDao>) -> Self {
        Self { audiotrack_dao }
    }

    pub async fn handle(&self, id: i64) -> Result<Option<AudiotrackView>, QueryError> {
        Ok(self
            .audiotrack_dao
            .get_by_id(id)
            .await?
            .map(AudiotrackView::from))
    }
}
