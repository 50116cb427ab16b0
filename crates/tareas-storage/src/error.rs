//! Storage error types for tareas-storage.
//!
//! [`StorageError`] covers all anticipated failure modes in the storage layer:
//! engine failures, migration failures, and the not-found outcome reported by
//! toggle and delete.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite engine reported an error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A tarea with the given ID was not found.
    #[error("tarea not found: {0}")]
    TareaNotFound(i64),
}
