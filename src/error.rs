//! Error types for Inventory Core

use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database file cannot be opened or created - fatal at startup
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Schema creation failed - store may be degraded
    #[error("Schema error: {0}")]
    Schema(String),

    /// Statement preparation or execution failed
    #[error("Query error: {0}")]
    Query(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::StorageUnavailable("/path/to/db".to_string());
        assert!(err.to_string().contains("/path/to/db"));

        let err = StoreError::Schema("no such table".to_string());
        assert!(err.to_string().contains("no such table"));

        let err = StoreError::Query("syntax error".to_string());
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let store_err: StoreError = sqlite_err.into();
        match store_err {
            StoreError::Query(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Query"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let store_err: StoreError = io_err.into();
        match store_err {
            StoreError::Io(_) => {}
            _ => panic!("Expected Io"),
        }
    }
}
