//! Item operations
//!
//! This module provides the add and list operations of the store. No input
//! validation is applied: empty names and negative quantities are stored
//! as given.

use tracing::debug;
use crate::error::Result;
use crate::database::models::Item;
use crate::database::queries;
use super::categories::resolve_category_id;
use super::store::InventoryStore;

impl InventoryStore {
    /// Add an item, resolving (or implicitly creating) its category by name.
    ///
    /// The category resolution and the item insert run in one transaction:
    /// a failed insert leaves neither a half-written item nor a stray new
    /// category behind.
    pub fn add_item(&mut self, name: &str, category: &str, quantity: i64, note: &str) -> Result<()> {
        let tx = self.conn_mut()?.transaction()?;
        let category_id = resolve_category_id(&tx, category)?;
        queries::insert_item(&tx, name, category_id, quantity, note)?;
        tx.commit()?;

        debug!(item = name, category, quantity, "item added");
        Ok(())
    }

    /// Get every item with its category name, in item-id order.
    ///
    /// Uses an inner join, so an item whose categoryID matches no category
    /// row does not appear.
    pub fn list_all(&self) -> Result<Vec<Item>> {
        queries::select_items_joined(self.conn()?)
    }

    /// Get items filtered by category name, in item-id order, or every item
    /// when `category` is `None`. A name matching no category yields an
    /// empty vec.
    ///
    /// Unlike [`list_all`](Self::list_all), this path resolves each row's
    /// category name with a secondary per-row lookup; rows whose lookup
    /// finds nothing are dropped.
    pub fn list_by_category(&self, category: Option<&str>) -> Result<Vec<Item>> {
        let conn = self.conn()?;

        let rows = match category {
            Some(name) => queries::select_item_rows_in_category(conn, name)?,
            None => queries::select_item_rows(conn)?,
        };

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(category) = queries::category_name_by_id(conn, row.category_id)? else {
                continue;
            };
            items.push(Item {
                id: row.id,
                name: row.name,
                category,
                quantity: row.quantity,
                note: row.note,
            });
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::queries;
    use tempfile::TempDir;

    #[test]
    fn test_list_by_category_drops_dangling_rows() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = InventoryStore::open(temp_dir.path()).unwrap();

        store.add_item("Milk", "Dairy", 2, "fresh").unwrap();

        // Fabricate a row whose categoryID matches no category
        let conn = store.conn().unwrap();
        queries::insert_item(conn, "Ghost", 9999, 1, "").unwrap();
        assert_eq!(queries::select_item_rows(conn).unwrap().len(), 2);
        assert_eq!(queries::category_name_by_id(conn, 9999).unwrap(), None);

        let items = store.list_by_category(None).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].category, "Dairy");
    }
}
