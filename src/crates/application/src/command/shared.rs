use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Raw text fields of a submitted form, keyed by field name.
pub type FieldMap = HashMap<String, String>;

/// 按实体类型划分的图片子目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoKind {
    Artists,
    Audiotracks,
}

impl PhotoKind {
    pub fn dir(&self) -> &'static str {
        match self {
            PhotoKind::Artists => "artists",
            PhotoKind::Audiotracks => "audiotracks",
        }
    }
}

/// An uploaded binary together with its original filename.
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// 照片暂存器
///
/// Writes an uploaded binary beneath the per-kind directory and returns the
/// public `/images/{dir}/{filename}` path. Implementations must verify the
/// file is actually present after the write; same-named files are silently
/// overwritten (last write wins).
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn store(
        &self,
        kind: PhotoKind,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, AppError>;
}

// Form field coercion. Forms arrive as untyped text; these helpers apply the
// normalization rules shared by both entity workflows: trim free text, treat
// empty-after-trim optional fields as absent, parse numbers best-effort.

pub fn require_text(fields: &FieldMap, name: &str) -> Result<String, AppError> {
    match fields.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::MissingField(name.to_string())),
    }
}

pub fn optional_text(fields: &FieldMap, name: &str) -> Option<String> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Optional numeric field; unparseable input means absent.
pub fn optional_int(fields: &FieldMap, name: &str) -> Option<i32> {
    fields.get(name).and_then(|v| v.trim().parse::<i32>().ok())
}

/// Counter field; unparseable input means zero.
pub fn count_or_zero(fields: &FieldMap, name: &str) -> i32 {
    optional_int(fields, name).unwrap_or(0)
}

/// Boolean-like form value: only the literal string `true` is true.
pub fn flag(fields: &FieldMap, name: &str) -> bool {
    fields.get(name).map(|v| v.trim() == "true").unwrap_or(false)
}

/// Required numeric field. Presence is a `MissingField`; a present value
/// that does not parse is an `InvalidInput` rather than a silent default.
pub fn require_int(fields: &FieldMap, name: &str) -> Result<i32, AppError> {
    let raw = require_text(fields, name)?;
    raw.parse::<i32>()
        .map_err(|_| AppError::InvalidInput(format!("field {} is not a number: {}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_require_text_trims() {
        let f = fields(&[("name", "  Kino  ")]);
        assert_eq!(require_text(&f, "name").unwrap(), "Kino");
    }

    #[test]
    fn test_require_text_rejects_absent_and_blank() {
        let f = fields(&[("name", "   ")]);
        assert!(matches!(
            require_text(&f, "name"),
            Err(AppError::MissingField(ref n)) if n == "name"
        ));
        assert!(matches!(
            require_text(&f, "title"),
            Err(AppError::MissingField(_))
        ));
    }

    #[test]
    fn test_optional_text_blank_is_absent() {
        let f = fields(&[("bio", "  "), ("label", " Melodiya ")]);
        assert_eq!(optional_text(&f, "bio"), None);
        assert_eq!(optional_text(&f, "label").as_deref(), Some("Melodiya"));
    }

    #[test]
    fn test_optional_int_best_effort() {
        let f = fields(&[("formed_year", "1981"), ("release_year", "soon")]);
        assert_eq!(optional_int(&f, "formed_year"), Some(1981));
        assert_eq!(optional_int(&f, "release_year"), None);
        assert_eq!(optional_int(&f, "missing"), None);
    }

    #[test]
    fn test_count_defaults_to_zero() {
        let f = fields(&[("play_count", "abc")]);
        assert_eq!(count_or_zero(&f, "play_count"), 0);
        let f = fields(&[("play_count", " 42 ")]);
        assert_eq!(count_or_zero(&f, "play_count"), 42);
    }

    #[test]
    fn test_flag_only_literal_true() {
        assert!(flag(&fields(&[("is_active", "true")]), "is_active"));
        assert!(!flag(&fields(&[("is_active", "yes")]), "is_active"));
        assert!(!flag(&fields(&[]), "is_active"));
    }

    #[test]
    fn test_require_int_distinguishes_absent_from_garbage() {
        assert!(matches!(
            require_int(&fields(&[]), "duration"),
            Err(AppError::MissingField(_))
        ));
        assert!(matches!(
            require_int(&fields(&[("duration", "3:05")]), "duration"),
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(
            require_int(&fields(&[("duration", "185")]), "duration").unwrap(),
            185
        );
    }
}
