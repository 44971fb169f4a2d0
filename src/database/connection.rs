//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use tracing::warn;
use crate::error::{StoreError, Result};
use super::schema;

/// Database connection wrapper
pub struct Database {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection
    conn: Option<Connection>,
}

impl Database {
    /// Open a database at the specified path, creating the file if absent,
    /// and ensure the schema exists.
    ///
    /// A connection failure is fatal and returned as
    /// [`StoreError::StorageUnavailable`]. Schema creation is best-effort:
    /// statements are `IF NOT EXISTS` and a failure is logged without
    /// aborting the open.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            StoreError::StorageUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let db = Self {
            path: path.to_path_buf(),
            conn: Some(conn),
        };
        db.ensure_schema();

        Ok(db)
    }

    /// Run all schema statements, logging failures instead of propagating
    /// them. Idempotent; runs unconditionally on every open.
    fn ensure_schema(&self) {
        let Some(conn) = self.conn.as_ref() else {
            return;
        };
        for sql in schema::CREATE_ALL {
            if let Err(e) = conn.execute(sql, []) {
                let err = StoreError::Schema(e.to_string());
                warn!(path = %self.path.display(), %err, "schema statement failed");
            }
        }
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or_else(|| {
            StoreError::Query("Database not open".to_string())
        })
    }

    /// Get a mutable reference to the connection
    pub fn connection_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or_else(|| {
            StoreError::Query("Database not open".to_string())
        })
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the database connection
    pub fn close(&mut self) {
        self.conn = None;
    }

    /// Check if database is open
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        assert!(db.is_open());
        assert!(db_path.exists());
        assert_eq!(db.path(), db_path);
    }

    #[test]
    fn test_open_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        // Schema creation must survive a second open on the same file
        let db = Database::open(&db_path).unwrap();
        drop(db);
        let db = Database::open(&db_path).unwrap();

        let count: i64 = db
            .connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM Item", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_open_bad_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a database file
        let result = Database::open(temp_dir.path());
        match result {
            Err(StoreError::StorageUnavailable(msg)) => assert!(!msg.is_empty()),
            _ => panic!("Expected StorageUnavailable"),
        }
    }

    #[test]
    fn test_close() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let mut db = Database::open(&db_path).unwrap();
        db.close();
        assert!(!db.is_open());
        assert!(db.connection().is_err());
    }
}
