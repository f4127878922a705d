use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use application::error::AppError;
use log::error;
use serde::Deserialize;
use thiserror::Error;

pub mod artists;
pub mod audiotracks;

/// `?page=N` of the listing endpoints; missing means page 1.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),
    #[error("Malformed multipart form: {0}")]
    Multipart(String),
}

fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::App(e) if e.is_not_found() => StatusCode::NOT_FOUND,
        ApiError::App(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
        ApiError::App(AppError::AuthError(_)) => StatusCode::UNAUTHORIZED,
        ApiError::App(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        error!("api error: {}", self);
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

/// Form endpoints answer plain text; the legacy pages render it directly.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct FormError(ApiError);

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<AppError> for FormError {
    fn from(err: AppError) -> Self {
        Self(ApiError::App(err))
    }
}

impl actix_web::error::ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        error!("form error: {}", self);
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    artists::configure_service(cfg);
    audiotracks::configure_service(cfg);
}
