//! Storage error types for kvjson-storage.
//!
//! [`StorageError`] covers the failure modes a backend can report. Callers
//! in `kvjson-core` absorb all of them; backends never do.

use thiserror::Error;

/// Errors produced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// The host store could not be reached at all.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// The host store rejected an operation (e.g. quota exceeded).
    #[error("host storage error: {reason}")]
    Host { reason: String },
}
