use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("movie not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] cinestream_model::ModelError),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
