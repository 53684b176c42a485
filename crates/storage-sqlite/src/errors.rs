//! Storage-specific error types for SQLite operations.
//!
//! This module wraps rusqlite and serde_json errors and converts them to
//! the storage-agnostic error types defined in `nestegg_core`.

use thiserror::Error;

use nestegg_core::errors::{DatabaseError, Error};

/// Storage-specific errors.
///
/// These errors are internal to the storage layer and are converted to
/// `nestegg_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    #[error("Schema initialization failed: {0}")]
    Migration(String),

    #[error("Record serialization failed: {0}")]
    Serialization(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e))
            }
            StorageError::QueryFailed(rusqlite::Error::QueryReturnedNoRows) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(rusqlite::Error::SqliteFailure(e, message))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Error::Database(DatabaseError::UniqueViolation(
                    message.unwrap_or_else(|| e.to_string()),
                ))
            }
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::Migration(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::Serialization(e) => Error::Database(DatabaseError::Internal(e)),
        }
    }
}

/// Extension trait for converting rusqlite results to core results.
///
/// Provides an `.into_core()` method on any `Result<T, rusqlite::Error>`
/// which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> nestegg_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, rusqlite::Error> {
    fn into_core(self) -> nestegg_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
