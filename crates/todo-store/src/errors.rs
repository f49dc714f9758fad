//! Error types for the task store.
//!
//! [`StoreError`] covers exactly one failure class: the backing medium
//! could not be opened, read, or written. A missing task id is a routine
//! outcome (stale link, already-deleted task) and is represented as
//! `Option`/`bool` in the operation signatures, never as an error.

use thiserror::Error;

/// Errors that can occur during task store operations.
///
/// Every variant means the storage medium was unavailable; the store
/// never retries on its own — retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("storage unavailable: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error (database could not be opened or acquired).
    #[error("storage unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failed.
    #[error("migration error: {message}")]
    Migration {
        /// Describes which migration failed and why.
        message: String,
    },
}

/// Convenience type alias for task store results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn sqlite_error_display() {
        let err = StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().contains("storage unavailable"));
    }

    #[test]
    fn migration_error_display() {
        let err = StoreError::Migration {
            message: "v001 failed: table already exists".into(),
        };
        assert_eq!(
            err.to_string(),
            "migration error: v001 failed: table already exists"
        );
    }

    #[test]
    fn from_rusqlite_error() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let err: StoreError = sqlite_err.into();
        assert_matches!(err, StoreError::Sqlite(_));
    }

    #[test]
    fn result_alias() {
        fn example() -> Result<i64> {
            Ok(7)
        }
        assert_eq!(example().unwrap(), 7);
    }
}
