//! Main InventoryStore API
//!
//! This module provides the primary interface for interacting with
//! an inventory database.

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use tracing::debug;
use crate::error::{StoreError, Result};
use crate::database::{Database, queries};
use crate::DATABASE_FILENAME;

/// Persistence gateway over the inventory database file.
///
/// The store exclusively owns the connection; all operations return owned
/// snapshots, never references into storage. Writes take `&mut self`, which
/// pins the single-writer model at compile time.
pub struct InventoryStore {
    /// Path to the store folder
    pub(crate) folder: PathBuf,
    /// Database connection
    pub(crate) db: Option<Database>,
}

impl InventoryStore {
    /// Open a store rooted at a folder, creating the folder and the
    /// database file (`inventory.sqlite`) if they do not exist yet.
    pub fn open(folder: &Path) -> Result<Self> {
        std::fs::create_dir_all(folder)?;

        let db_path = folder.join(DATABASE_FILENAME);
        let db = Database::open(&db_path)?;

        Ok(Self {
            folder: folder.to_path_buf(),
            db: Some(db),
        })
    }

    /// Open a store over an explicit database file path, for callers that
    /// manage their own file layout.
    pub fn open_file(path: &Path) -> Result<Self> {
        let folder = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let db = Database::open(path)?;

        Ok(Self { folder, db: Some(db) })
    }

    /// Get the store folder path
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Check if the store is open
    pub fn is_open(&self) -> bool {
        self.db.as_ref().is_some_and(|db| db.is_open())
    }

    /// Close the store
    pub fn close(&mut self) {
        if let Some(mut db) = self.db.take() {
            db.close();
        }
    }

    /// Delete every category and every item.
    ///
    /// Categories are removed first, then items, matching the historical
    /// order; the whole sequence runs in one transaction so the observable
    /// postcondition is simply that both tables end up empty.
    pub fn delete_all(&mut self) -> Result<()> {
        let tx = self.conn_mut()?.transaction()?;
        queries::delete_all_categories(&tx)?;
        queries::delete_all_items(&tx)?;
        tx.commit()?;

        debug!("all items and categories deleted");
        Ok(())
    }

    pub(crate) fn conn(&self) -> Result<&Connection> {
        self.db
            .as_ref()
            .ok_or_else(|| StoreError::Query("Store not open".to_string()))?
            .connection()
    }

    pub(crate) fn conn_mut(&mut self) -> Result<&mut Connection> {
        self.db
            .as_mut()
            .ok_or_else(|| StoreError::Query("Store not open".to_string()))?
            .connection_mut()
    }
}
