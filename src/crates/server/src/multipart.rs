use crate::api::ApiError;
use crate::consts;
use actix_multipart::Multipart;
use application::command::shared::{FieldMap, UploadedPhoto};
use futures::StreamExt;

/// Reads a multipart form into its text fields plus the optional `photo`
/// file part. Parts are buffered whole; uploads here are small cover images
/// submitted from the admin pages.
pub async fn read_form(
    mut payload: Multipart,
) -> Result<(FieldMap, Option<UploadedPhoto>), ApiError> {
    let mut fields = FieldMap::new();
    let mut photo: Option<UploadedPhoto> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::Multipart(e.to_string()))?;
        let name = field.name().to_string();
        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ApiError::Multipart(e.to_string()))?;
            data.extend_from_slice(&chunk);
        }

        match filename {
            Some(filename) if name == consts::PHOTO_FIELD => {
                // an empty file input still submits a nameless part
                if !filename.is_empty() && !data.is_empty() {
                    photo = Some(UploadedPhoto {
                        filename,
                        bytes: data,
                    });
                }
            }
            _ => {
                fields.insert(name, String::from_utf8_lossy(&data).into_owned());
            }
        }
    }

    Ok((fields, photo))
}
