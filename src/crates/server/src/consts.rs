/// 表单创建/编辑成功后跳转的静态列表页
pub const ARTISTS_INDEX_PAGE: &str = "/artists/index.html";
pub const AUDIOTRACKS_INDEX_PAGE: &str = "/audiotracks/index.html";

/// Name of the file field in the multipart create/edit forms.
pub const PHOTO_FIELD: &str = "photo";
