use crate::command::shared::{self, FieldMap, PhotoKind, PhotoStore, UploadedPhoto};
use crate::error::AppError;
use domain::artist::{Artist, ArtistDraft, ArtistRepository};
use domain::value::{normalize_photo_path, ArtistId};
use log::warn;
use std::sync::Arc;

/// Artist fields as submitted on the JSON API. The create and update
/// endpoints are a pass-through: no trimming, defaults only where the data
/// model declares one (`is_active` → true).
#[derive(Debug, Clone)]
pub struct ArtistFields {
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: Option<bool>,
    pub label: Option<String>,
    pub photo: Option<String>,
}

#[derive(Clone)]
pub struct ArtistService {
    repo: Arc<dyn ArtistRepository>,
    photos: Arc<dyn PhotoStore>,
}

impl ArtistService {
    pub fn new(repo: Arc<dyn ArtistRepository>, photos: Arc<dyn PhotoStore>) -> Self {
        Self { repo, photos }
    }

    /// Direct API create. Client-supplied photo values go through the legacy
    /// path shim before they are stored.
    pub async fn create(&self, cmd: ArtistFields) -> Result<Artist, AppError> {
        let draft = ArtistDraft {
            name: cmd.name,
            bio: cmd.bio,
            country: cmd.country,
            genre: cmd.genre,
            formed_year: cmd.formed_year,
            is_active: cmd.is_active.unwrap_or(true),
            label: cmd.label,
            photo: cmd.photo.as_deref().map(normalize_photo_path),
        };
        Ok(self.repo.insert(draft).await?)
    }

    /// 创建带照片的艺术家（表单工作流）
    ///
    /// Validate → normalize → insert with photo unset → stage the upload →
    /// write the photo path. The row and the file are written without a
    /// shared transaction, so a failure after the insert deletes the
    /// just-created row before the error surfaces.
    pub async fn create_with_photo(
        &self,
        fields: &FieldMap,
        upload: Option<UploadedPhoto>,
    ) -> Result<Artist, AppError> {
        let draft = Self::draft_from_form(fields)?;
        let mut artist = self.repo.insert(draft).await?;
        if let Some(upload) = upload {
            match self.stage_photo(&artist.id, upload).await {
                Ok(path) => artist.photo = Some(path),
                Err(err) => {
                    // best-effort compensation: a failed undo is logged, the
                    // client still sees the staging error
                    if let Err(undo) = self.repo.delete(artist.id.clone()).await {
                        warn!(
                            "compensating delete of artist {} failed: {}",
                            artist.id, undo
                        );
                    }
                    return Err(err);
                }
            }
        }
        Ok(artist)
    }

    /// Form edit: re-validates and re-trims like create, keeps the stored
    /// photo unless a new file was uploaded. No delete-on-failure here, the
    /// pre-existing row must survive a failed edit.
    pub async fn edit_with_photo(
        &self,
        id: i64,
        fields: &FieldMap,
        upload: Option<UploadedPhoto>,
    ) -> Result<Artist, AppError> {
        let existing = self
            .repo
            .by_id(ArtistId::from(id))
            .await?
            .ok_or_else(|| AppError::NotFound("artist".to_string(), id))?;
        let draft = Self::draft_from_form(fields)?;
        let photo = match upload {
            Some(upload) => Some(
                self.photos
                    .store(PhotoKind::Artists, &upload.filename, &upload.bytes)
                    .await?,
            ),
            None => existing.photo,
        };
        let updated = Artist {
            id: existing.id,
            name: draft.name,
            bio: draft.bio,
            country: draft.country,
            genre: draft.genre,
            formed_year: draft.formed_year,
            is_active: draft.is_active,
            label: draft.label,
            photo,
        };
        Ok(self.repo.update(updated).await?)
    }

    /// Direct API update: full overwrite of every column with what was sent.
    pub async fn update(&self, id: i64, cmd: ArtistFields) -> Result<Artist, AppError> {
        let existing = self
            .repo
            .by_id(ArtistId::from(id))
            .await?
            .ok_or_else(|| AppError::NotFound("artist".to_string(), id))?;
        let updated = Artist {
            id: existing.id,
            name: cmd.name,
            bio: cmd.bio,
            country: cmd.country,
            genre: cmd.genre,
            formed_year: cmd.formed_year,
            is_active: cmd.is_active.unwrap_or(true),
            label: cmd.label,
            photo: cmd.photo.as_deref().map(normalize_photo_path),
        };
        Ok(self.repo.update(updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        Ok(self.repo.delete(ArtistId::from(id)).await?)
    }

    async fn stage_photo(
        &self,
        id: &ArtistId,
        upload: UploadedPhoto,
    ) -> Result<String, AppError> {
        let path = self
            .photos
            .store(PhotoKind::Artists, &upload.filename, &upload.bytes)
            .await?;
        self.repo.set_photo(id.clone(), &path).await?;
        Ok(path)
    }

    /// Required-field check and normalization, before any row exists.
    fn draft_from_form(fields: &FieldMap) -> Result<ArtistDraft, AppError> {
        let name = shared::require_text(fields, "name")?;
        Ok(ArtistDraft {
            name,
            bio: shared::optional_text(fields, "bio"),
            country: shared::optional_text(fields, "country"),
            genre: shared::optional_text(fields, "genre"),
            formed_year: shared::optional_int(fields, "formed_year"),
            is_active: shared::flag(fields, "is_active"),
            label: shared::optional_text(fields, "label"),
            photo: None,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use domain::artist::ArtistError;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct MemArtistRepository {
        pub rows: Mutex<Vec<Artist>>,
        next_id: AtomicI64,
        pub fail_set_photo: bool,
        pub fail_delete: bool,
    }

    #[async_trait]
    impl ArtistRepository for MemArtistRepository {
        async fn insert(&self, draft: ArtistDraft) -> Result<Artist, ArtistError> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let artist = Artist {
                id: ArtistId::from(id),
                name: draft.name,
                bio: draft.bio,
                country: draft.country,
                genre: draft.genre,
                formed_year: draft.formed_year,
                is_active: draft.is_active,
                label: draft.label,
                photo: draft.photo,
            };
            self.rows.lock().unwrap().push(artist.clone());
            Ok(artist)
        }

        async fn by_id(&self, id: ArtistId) -> Result<Option<Artist>, ArtistError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned())
        }

        async fn update(&self, artist: Artist) -> Result<Artist, ArtistError> {
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|a| a.id == artist.id)
                .ok_or(ArtistError::NotFound(artist.id.as_i64()))?;
            *slot = artist.clone();
            Ok(artist)
        }

        async fn set_photo(&self, id: ArtistId, photo: &str) -> Result<(), ArtistError> {
            if self.fail_set_photo {
                return Err(ArtistError::DbErr("connection reset".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            let slot = rows
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(ArtistError::NotFound(id.as_i64()))?;
            slot.photo = Some(photo.to_string());
            Ok(())
        }

        async fn delete(&self, id: ArtistId) -> Result<(), ArtistError> {
            if self.fail_delete {
                return Err(ArtistError::DbErr("connection reset".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.id != id);
            if rows.len() == before {
                return Err(ArtistError::NotFound(id.as_i64()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct MemPhotoStore {
        pub fail: bool,
        pub stored: Mutex<Vec<(PhotoKind, String)>>,
    }

    #[async_trait]
    impl PhotoStore for MemPhotoStore {
        async fn store(
            &self,
            kind: PhotoKind,
            filename: &str,
            _bytes: &[u8],
        ) -> Result<String, AppError> {
            if self.fail {
                return Err(AppError::Storage("disk full".to_string()));
            }
            self.stored
                .lock()
                .unwrap()
                .push((kind, filename.to_string()));
            Ok(format!("/images/{}/{}", kind.dir(), filename))
        }
    }

    fn service(
        repo: Arc<MemArtistRepository>,
        photos: Arc<MemPhotoStore>,
    ) -> ArtistService {
        ArtistService::new(repo, photos)
    }

    fn form(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn upload(filename: &str) -> UploadedPhoto {
        UploadedPhoto {
            filename: filename.to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    #[tokio::test]
    async fn test_missing_name_fails_before_insert() {
        let repo = Arc::new(MemArtistRepository::default());
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let err = svc
            .create_with_photo(&form(&[("bio", "b")]), Some(upload("a.jpg")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingField(ref f) if f == "name"));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_trims_and_coerces() {
        let repo = Arc::new(MemArtistRepository::default());
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let artist = svc
            .create_with_photo(
                &form(&[
                    ("name", "  Kino "),
                    ("bio", "  "),
                    ("formed_year", "1981"),
                    ("is_active", "true"),
                ]),
                None,
            )
            .await
            .unwrap();
        assert_eq!(artist.name, "Kino");
        assert_eq!(artist.bio, None);
        assert_eq!(artist.formed_year, Some(1981));
        assert!(artist.is_active);
        assert_eq!(artist.photo, None);
    }

    #[tokio::test]
    async fn test_create_with_photo_sets_public_path() {
        let repo = Arc::new(MemArtistRepository::default());
        let photos = Arc::new(MemPhotoStore::default());
        let svc = service(repo.clone(), photos.clone());

        let artist = svc
            .create_with_photo(&form(&[("name", "Kino")]), Some(upload("cover.jpg")))
            .await
            .unwrap();
        assert_eq!(artist.photo.as_deref(), Some("/images/artists/cover.jpg"));
        // persisted row carries the same path
        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows[0].photo.as_deref(), Some("/images/artists/cover.jpg"));
        assert_eq!(
            *photos.stored.lock().unwrap(),
            vec![(PhotoKind::Artists, "cover.jpg".to_string())]
        );
    }

    #[tokio::test]
    async fn test_staging_failure_rolls_back_row() {
        let repo = Arc::new(MemArtistRepository::default());
        let photos = Arc::new(MemPhotoStore {
            fail: true,
            ..Default::default()
        });
        let svc = service(repo.clone(), photos);

        let err = svc
            .create_with_photo(&form(&[("name", "Kino")]), Some(upload("cover.jpg")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_photo_update_failure_rolls_back_row() {
        let repo = Arc::new(MemArtistRepository {
            fail_set_photo: true,
            ..Default::default()
        });
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let err = svc
            .create_with_photo(&form(&[("name", "Kino")]), Some(upload("cover.jpg")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ArtistError(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_compensation_surfaces_original_error() {
        let repo = Arc::new(MemArtistRepository {
            fail_set_photo: true,
            fail_delete: true,
            ..Default::default()
        });
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let err = svc
            .create_with_photo(&form(&[("name", "Kino")]), Some(upload("cover.jpg")))
            .await
            .unwrap_err();
        // the staging error wins even though the undo also failed
        assert!(matches!(err, AppError::ArtistError(_)));
    }

    #[tokio::test]
    async fn test_edit_keeps_photo_unless_replaced() {
        let repo = Arc::new(MemArtistRepository::default());
        let photos = Arc::new(MemPhotoStore::default());
        let svc = service(repo.clone(), photos.clone());

        let artist = svc
            .create_with_photo(&form(&[("name", "Kino")]), Some(upload("old.jpg")))
            .await
            .unwrap();

        let kept = svc
            .edit_with_photo(artist.id.as_i64(), &form(&[("name", "Kino!")]), None)
            .await
            .unwrap();
        assert_eq!(kept.name, "Kino!");
        assert_eq!(kept.photo.as_deref(), Some("/images/artists/old.jpg"));

        let replaced = svc
            .edit_with_photo(
                artist.id.as_i64(),
                &form(&[("name", "Kino!")]),
                Some(upload("new.jpg")),
            )
            .await
            .unwrap();
        assert_eq!(replaced.photo.as_deref(), Some("/images/artists/new.jpg"));
    }

    #[tokio::test]
    async fn test_edit_missing_row_is_not_found() {
        let svc = service(
            Arc::new(MemArtistRepository::default()),
            Arc::new(MemPhotoStore::default()),
        );
        let err = svc
            .edit_with_photo(7, &form(&[("name", "X")]), None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_api_create_normalizes_legacy_photo() {
        let repo = Arc::new(MemArtistRepository::default());
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let artist = svc
            .create(ArtistFields {
                name: "Kino".to_string(),
                bio: None,
                country: None,
                genre: None,
                formed_year: None,
                is_active: None,
                label: None,
                photo: Some("/img/artists/kino.jpg".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(artist.photo.as_deref(), Some("/images/artists/kino.jpg"));
        assert!(artist.is_active, "is_active defaults to true on the API");
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = Arc::new(MemArtistRepository::default());
        let svc = service(repo.clone(), Arc::new(MemPhotoStore::default()));

        let artist = svc
            .create_with_photo(&form(&[("name", "Kino")]), None)
            .await
            .unwrap();
        svc.delete(artist.id.as_i64()).await.unwrap();
        let err = svc.delete(artist.id.as_i64()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
