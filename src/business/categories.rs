//! Category operations
//!
//! Categories are created implicitly the first time an item references a
//! new name; the name is treated as a de-facto unique key by looking up
//! before inserting. The schema itself does not enforce uniqueness.

use rusqlite::Connection;
use tracing::debug;
use crate::error::Result;
use crate::database::queries;
use super::store::InventoryStore;

impl InventoryStore {
    /// Return the id of the category with the given name, inserting a new
    /// row first if no such category exists.
    ///
    /// The lookup and the insert run inside one transaction, so concurrent
    /// callers cannot produce duplicate rows for the same name.
    pub fn get_or_create_category(&mut self, name: &str) -> Result<i64> {
        let tx = self.conn_mut()?.transaction()?;
        let id = resolve_category_id(&tx, name)?;
        tx.commit()?;
        Ok(id)
    }

    /// Get every category name, in row-id order
    pub fn list_category_names(&self) -> Result<Vec<String>> {
        queries::select_category_names(self.conn()?)
    }
}

/// Lookup-or-create a category id on an open connection. Callers that need
/// atomicity pass a transaction handle.
pub(crate) fn resolve_category_id(conn: &Connection, name: &str) -> Result<i64> {
    if let Some(id) = queries::find_category_id(conn, name)? {
        return Ok(id);
    }

    let id = queries::insert_category(conn, name)?;
    debug!(category = name, id, "category created");
    Ok(id)
}
