use crate::model::ProductId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or write the backing file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable ({}): malformed data: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage unavailable: {0}")]
    Store(String),
}

/// Errors raised by a [`ProductRepository`](crate::repository::ProductRepository).
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product code already exists: {0}")]
    CodeConflict(String),

    #[error("No product ids left: the catalog already holds id {}", ProductId::MAX)]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Domain errors returned by the [`CatalogService`](crate::service::CatalogService).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product does not exist: {0}")]
    NotExists(ProductId),

    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    #[error("Empty field: {}", .0.join(", "))]
    EmptyField(Vec<&'static str>),

    #[error("Invalid date: {0:?} (expected dd/mm/yyyy)")]
    InvalidDate(String),

    #[error("Invalid price: {0} (expected a finite number)")]
    InvalidPrice(f64),

    #[error("No product ids left: the catalog already holds id {}", ProductId::MAX)]
    IdsExhausted,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<RepositoryError> for CatalogError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => CatalogError::NotExists(id),
            RepositoryError::CodeConflict(code) => CatalogError::AlreadyExists(code),
            RepositoryError::IdsExhausted => CatalogError::IdsExhausted,
            RepositoryError::Storage(e) => CatalogError::Storage(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
