use crate::command::shared::{self, FieldMap, PhotoKind, PhotoStore, UploadedPhoto};
use crate::error::AppError;
use domain::audiotrack::{Audiotrack, AudiotrackDraft, AudiotrackRepository};
use domain::value::{normalize_photo_path, AudiotrackId};
use log::warn;
use std::sync::Arc;

/// Audiotrack fields as submitted on the JSON API.
#[derive(Debug, Clone)]
pub struct AudiotrackFields {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: Option<i32>,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

#[derive(Clone)]
pub struct AudiotrackService {
    repo: Arc<dyn AudiotrackRepository>,
    photos: Arc<dyn PhotoStore>,
}

impl AudiotrackService {
    pub fn new(repo: Arc<dyn AudiotrackRepository>, photos: Arc<dyn PhotoStore>) -> Self {
        Self { repo, photos }
    }

    /// Direct API create, pass-through except the legacy photo path shim.
    pub async fn create(&self, cmd: AudiotrackFields) -> Result<Audiotrack, AppError> {
        let draft = AudiotrackDraft {
            title: cmd.title,
            artist: cmd.artist,
            album: cmd.album,
            duration: cmd.duration,
            genre: cmd.genre,
            play_count: cmd.play_count.unwrap_or(0),
            release_year: cmd.release_year,
            photo: cmd.photo.as_deref().map(normalize_photo_path),
        };
        Ok(self.repo.insert(draft).await?)
    }

    /// 创建带照片的音轨（表单工作流），与艺术家侧相同的补偿语义
    pub async fn create_with_photo(
        &self,
        fields: &FieldMap,
        upload: Option<UploadedPhoto>,
    ) -> Result<Audiotrack, AppError> {
        let draft = Self::draft_from_form(fields)?;
        let mut track = self.repo.insert(draft).await?;
        if let Some(upload) = upload {
            match self.stage_photo(&track.id, upload).await {
                Ok(path) => track.photo = Some(path),
                Err(err) => {
                    if let Err(undo) = self.repo.delete(track.id.clone()).await {
                        warn!(
                            "compensating delete of audiotrack {} failed: {}",
                            track.id, undo
                        );
                    }
                    return Err(err);
                }
            }
        }
        Ok(track)
    }

    /// Form edit, no delete-on-failure.
    pub async fn edit_with_photo(
        &self,
        id: i64,
        fields: &FieldMap,
        upload: Option<UploadedPhoto>,
    ) -> Result<Audiotrack, AppError> {
        let existing = self
            .repo
            .by_id(AudiotrackId::from(id))
            .await?
            .ok_or_else(|| AppError::NotFound("audiotrack".to_string(), id))?;
        let draft = Self::draft_from_form(fields)?;
        let photo = match upload {
            Some(upload) => Some(
                self.photos
                    .store(PhotoKind::Audiotracks, &upload.filename, &upload.bytes)
                    .await?,
            ),
            None => existing.photo,
        };
        let updated = Audiotrack {
            id: existing.id,
            title: draft.title,
            artist: draft.artist,
            album: draft.album,
            duration: draft.duration,
            genre: draft.genre,
            play_count: draft.play_count,
            release_year: draft.release_year,
            photo,
        };
        Ok(self.repo.update(updated).await?)
    }

    /// Direct API update: full overwrite of every column with what was sent.
    pub async fn update(&self, id: i64, cmd: AudiotrackFields) -> Result<Audiotrack, AppError> {
        let existing = self
            .repo
            .by_id(AudiotrackId::from(id))
            .await?
            .ok_or_else(|| AppError::NotFound("audiotrack".to_string(), id))?;
        let updated = Audiotrack {
            id: existing.id,
            title: cmd.title,
            artist: cmd.artist,
            album: cmd.album,
            duration: cmd.duration,
            genre: cmd.genre,
            play_count: cmd.play_count.unwrap_or(0),
            release_year: cmd.release_year,
            photo: cmd.photo.as_deref().map(normalize_photo_path),
        };
        Ok(self.repo.update(updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        Ok(self.repo.delete(AudiotrackId::from(id)).await?)
    }

    async fn stage_photo(
        &self,
        id: &AudiotrackId,
        upload: UploadedPhoto,
    ) -> Result<String, AppError> {
        let path = self
            .photos
            .store(PhotoKind::Audiotracks, &upload.filename, &upload.bytes)
            .await?;
        self.repo.set_photo(id.clone(), &path).await?;
        Ok(path)
    }

    /// Required-field check and normalization, before any row exists.
    /// `duration` must be present and numeric; `play_count` falls back to 0.
    fn draft_from_form(fields: &FieldMap) -> Result<AudiotrackDraft, AppError> {
        let title = shared::require_text(fields, "title")?;
        let artist = shared::require_text(fields, "artist")?;
        let duration = shared::require_int(fields, "duration")?;
        Ok(AudiotrackDraft {
            title,
            artist,
            album: shared::optional_text(fields, "album"),
            duration,
            genre: shared::optional_text(fields, "genre"),
            play_count: shared::count_or_zero(fields, "play_count"),
            release_year: shared::optional_int(fields, "release_year"),
            photo: None,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::command::artist::tests::MemPhotoStore;
    use async_trait::async_trait;
    use domain::audiotrack::AudiotrackError;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct MemAudiotrackRepository {
        pub rows: Mutex<Vec<Audiotrack>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl AudiotrackRepository for MemAudiotrackRepository {
        async fn insert(&self, draft: AudiotrackDraft) -> Result<Audiotrack, AudiotrackError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let track = Audiotrack {
                id: AudiotrackId::from(id),
                title: draft.title,
                artist: draft.artist,
                album: draft.album,
                duration: draft.duration,
                genre: draft.genre,
                play_count: draft.play_count,
                release_year: draft.release_year,
                photo: draft.photo,
            };
            self.rows.lock().unwrap().push(track.clone());
            Ok(track)
        }

        async fn by_id(&self, id: AudiotrackId) -> Result<Option<Audiotrack>, AudiotrackError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == id)
                .cloned())
        }

        async fn update(&self, track: Audiotrack) -> Result<Audiotrack, AudiotrackError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|t| t.id == track.id)
                .ok_or(AudiotrackError::NotFound(track.id.as_i64()))?;
            *slot = track.clone();
            Ok(track)
        }

        async fn set_photo(&self, id: AudiotrackId, photo: &str) -> Result<(), AudiotrackError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(AudiotrackError::NotFound(id.as_i64()))?;
            slot.photo = Some(photo.to_string());
            Ok(())
        }

        async fn delete(&self, id: AudiotrackId) -> Result<(), AudiotrackError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|t| t.id != id);
            if rows.len() == before {
                return Err(AudiotrackError::NotFound(id.as_i64()));
            }
            Ok(())
        }
    }

    fn form(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_required_trio_enforced() {
        let repo = Arc::new(MemAudiotrackRepository::default());
        let svc = AudiotrackService::new(repo.clone(), Arc::new(MemPhotoStore::default()));

        for missing in ["title", "artist", "duration"] {
            let mut f = form(&[
                ("title", "Gruppa krovi"),
                ("artist", "Kino"),
                ("duration", "283"),
            ]);
            f.remove(missing);
            let err = svc.create_with_photo(&f, None).await.unwrap_err();
            assert!(
                matches!(err, AppError::MissingField(ref n) if n == missing),
                "expected MissingField({missing})"
            );
        }
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_duration_rejected_before_insert() {
        let repo = Arc::new(MemAudiotrackRepository::default());
        let svc = AudiotrackService::new(repo.clone(), Arc::new(MemPhotoStore::default()));

        let err = svc
            .create_with_photo(
                &form(&[
                    ("title", "Gruppa krovi"),
                    ("artist", "Kino"),
                    ("duration", "4:43"),
                ]),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_defaults_play_count() {
        let repo = Arc::new(MemAudiotrackRepository::default());
        let svc = AudiotrackService::new(repo.clone(), Arc::new(MemPhotoStore::default()));

        let track = svc
            .create_with_photo(
                &form(&[
                    ("title", " Gruppa krovi "),
                    ("artist", "Kino"),
                    ("duration", "283"),
                    ("play_count", "many"),
                    ("release_year", "1988"),
                ]),
                None,
            )
            .await
            .unwrap();
        assert_eq!(track.title, "Gruppa krovi");
        assert_eq!(track.play_count, 0);
        assert_eq!(track.release_year, Some(1988));
    }

    #[tokio::test]
    async fn test_create_with_photo_uses_audiotracks_dir() {
        let repo = Arc::new(MemAudiotrackRepository::default());
        let photos = Arc::new(MemPhotoStore::default());
        let svc = AudiotrackService::new(repo.clone(), photos);

        let track = svc
            .create_with_photo(
                &form(&[
                    ("title", "Gruppa krovi"),
                    ("artist", "Kino"),
                    ("duration", "283"),
                ]),
                Some(UploadedPhoto {
                    filename: "sleeve.png".to_string(),
                    bytes: vec![1, 2, 3],
                }),
            )
            .await
            .unwrap();
        assert_eq!(
            track.photo.as_deref(),
            Some("/images/audiotracks/sleeve.png")
        );
    }

    #[tokio::test]
    async fn test_staging_failure_rolls_back_row() {
        let repo = Arc::new(MemAudiotrackRepository::default());
        let photos = Arc::new(MemPhotoStore {
            fail: true,
            ..Default::default()
        });
        let svc = AudiotrackService::new(repo.clone(), photos);

        let err = svc
            .create_with_photo(
                &form(&[
                    ("title", "Gruppa krovi"),
                    ("artist", "Kino"),
                    ("duration", "283"),
                ]),
                Some(UploadedPhoto {
                    filename: "sleeve.png".to_string(),
                    bytes: vec![1, 2, 3],
                }),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
