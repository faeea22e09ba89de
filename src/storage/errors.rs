//! Storage error types
//!
//! Error codes:
//! - COURSE_API_STORAGE_IO_ERROR
//! - COURSE_API_STORAGE_QUERY_FAILED
//! - COURSE_API_STORAGE_CONSTRAINT_VIOLATION

use std::io;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures raised by the storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while preparing the database location
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Any failure reported by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "COURSE_API_STORAGE_IO_ERROR",
            StorageError::Database(_) if self.is_constraint_violation() => {
                "COURSE_API_STORAGE_CONSTRAINT_VIOLATION"
            }
            StorageError::Database(_) => "COURSE_API_STORAGE_QUERY_FAILED",
        }
    }

    /// True when the database rejected a write because of a NOT NULL,
    /// UNIQUE or other table constraint.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            StorageError::Database(sqlx::Error::Database(db)) => !matches!(
                db.kind(),
                sqlx::error::ErrorKind::Other
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_code() {
        let err = StorageError::Io {
            path: "/nonexistent".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.code(), "COURSE_API_STORAGE_IO_ERROR");
        assert!(!err.is_constraint_violation());
        assert!(err.to_string().contains("/nonexistent"));
    }

    #[test]
    fn test_driver_error_code() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.code(), "COURSE_API_STORAGE_QUERY_FAILED");
        assert!(!err.is_constraint_violation());
    }
}
