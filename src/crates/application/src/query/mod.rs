use thiserror::Error;

pub mod dao;
pub mod dto;
pub mod get_artist;
pub mod get_artist_page;
pub mod get_audiotrack;
pub mod get_audiotrack_page;
pub mod shared;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    DbError(String),
}
