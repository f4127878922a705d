use std::fmt::{self, Display};

// Helper macro to define aggregate ID newtypes and common trait impls
macro_rules! define_id {
    ($name:ident $(, $extra:ident)*) => {
        #[derive(Debug, Clone, PartialEq $(, $extra)*)]
        pub struct $name(i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

    };
}

define_id!(ArtistId, Eq, Hash);
define_id!(AudiotrackId, Eq, Hash);
define_id!(UserId, Eq, Hash);

/// 旧数据中的封面路径以 /img/ 开头，统一改写为 /images/ 前缀
///
/// Rows migrated from the legacy schema may still carry `/img/...` photo
/// paths. Every value crossing the read boundary (and any client-supplied
/// photo on the JSON write path) goes through this shim.
pub fn normalize_photo_path(path: &str) -> String {
    match path.strip_prefix("/img/") {
        Some(rest) => format!("/images/{}", rest),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_prefix_rewritten() {
        assert_eq!(normalize_photo_path("/img/x.jpg"), "/images/x.jpg");
        assert_eq!(
            normalize_photo_path("/img/artists/cover.png"),
            "/images/artists/cover.png"
        );
    }

    #[test]
    fn test_modern_path_untouched() {
        assert_eq!(
            normalize_photo_path("/images/artists/cover.png"),
            "/images/artists/cover.png"
        );
        // only a leading /img/ segment is legacy
        assert_eq!(normalize_photo_path("/data/img/x.jpg"), "/data/img/x.jpg");
    }
}
