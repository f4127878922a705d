use crate::query::QueryError;
use domain::artist::ArtistError;
use domain::audiotrack::AudiotrackError;
use domain::user::UserError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} not found: {1}")]
    NotFound(String, i64),
    #[error("Photo storage error: {0}")]
    Storage(String),
    #[error("Auth error: {0}")]
    AuthError(String),
    #[error("Artist error: {0}")]
    ArtistError(#[from] ArtistError),
    #[error("Audiotrack error: {0}")]
    AudiotrackError(#[from] AudiotrackError),
    #[error("User error: {0}")]
    UserError(#[from] UserError),
    #[error("Query error: {0}")]
    QueryError(#[from] QueryError),
}

impl AppError {
    /// True when the error means "no such row", whatever layer raised it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_, _)
                | AppError::ArtistError(ArtistError::NotFound(_))
                | AppError::AudiotrackError(AudiotrackError::NotFound(_))
        )
    }

    /// True for client input errors (400-class).
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::MissingField(_) | AppError::InvalidInput(_))
    }
}
