//! Repository Module
//!
//! Typed CRUD over the raw [`DocumentStore`](super::DocumentStore):
//! repositories own a store handle, (de)serialize the at-rest record
//! shapes and translate store failures into [`RepoError`].

pub mod reservation;
pub mod table;

// Re-exports
pub use reservation::ReservationRepository;
pub use table::TableRepository;

use thiserror::Error;

use super::StoreError;
use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
