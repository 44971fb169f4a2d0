//! SQL query operations for database access
//!
//! This module provides low-level query functions over an open connection.
//! For the caller-facing operations, use the InventoryStore API.

use rusqlite::{Connection, params};
use crate::database::models::{Item, ItemRow};
use crate::error::Result;

// ============================================================================
// Category queries
// ============================================================================

/// Look up a category id by exact name match
pub fn find_category_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
    let result = conn.query_row(
        "SELECT ID FROM Category WHERE name = ?",
        params![name],
        |row| row.get(0),
    );
    match result {
        Ok(id) => Ok(Some(id)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Insert a new category and return its assigned id
pub fn insert_category(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT INTO Category (name) VALUES (?)", params![name])?;
    Ok(conn.last_insert_rowid())
}

/// Resolve a category's display name by id
pub fn category_name_by_id(conn: &Connection, category_id: i64) -> Result<Option<String>> {
    let result = conn.query_row(
        "SELECT name FROM Category WHERE ID = ?",
        params![category_id],
        |row| row.get(0),
    );
    match result {
        Ok(name) => Ok(Some(name)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Get every category name, ordered by row id
pub fn select_category_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM Category ORDER BY ID")?;
    let names = stmt.query_map([], |row| row.get(0))?;
    names.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Delete every category row
pub fn delete_all_categories(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM Category", [])?;
    Ok(())
}

// ============================================================================
// Item queries
// ============================================================================

/// Insert a new item referencing an already-resolved category id
pub fn insert_item(
    conn: &Connection,
    name: &str,
    category_id: i64,
    quantity: i64,
    note: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO Item (name, categoryID, quantity, note) VALUES (?, ?, ?, ?)",
        params![name, category_id, quantity, note],
    )?;
    Ok(())
}

/// Get every item joined with its category name, ordered by item id.
/// Items whose categoryID matches no category are excluded by the join.
pub fn select_items_joined(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT Item.ID, Item.name, Category.name, Item.quantity, Item.note
         FROM Item
         JOIN Category ON Item.categoryID = Category.ID
         ORDER BY Item.ID",
    )?;

    let items = stmt.query_map([], |row| {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            quantity: row.get(3)?,
            note: row.get(4)?,
        })
    })?;

    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get every raw item row, ordered by item id
pub fn select_item_rows(conn: &Connection) -> Result<Vec<ItemRow>> {
    let mut stmt = conn.prepare(
        "SELECT ID, name, categoryID, quantity, note FROM Item ORDER BY ID",
    )?;
    let rows = stmt.query_map([], map_item_row)?;
    rows.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Get raw item rows whose category has the given name, ordered by item id.
/// An unknown category name matches nothing.
pub fn select_item_rows_in_category(conn: &Connection, category: &str) -> Result<Vec<ItemRow>> {
    let mut stmt = conn.prepare(
        "SELECT ID, name, categoryID, quantity, note FROM Item
         WHERE categoryID = (SELECT ID FROM Category WHERE name = ?)
         ORDER BY ID",
    )?;
    let rows = stmt.query_map(params![category], map_item_row)?;
    rows.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

fn map_item_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ItemRow> {
    Ok(ItemRow {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        quantity: row.get(3)?,
        note: row.get(4)?,
    })
}

/// Delete every item row
pub fn delete_all_items(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM Item", [])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        for sql in schema::CREATE_ALL {
            conn.execute(sql, []).unwrap();
        }
        conn
    }

    #[test]
    fn test_find_category_missing() {
        let conn = test_conn();
        assert_eq!(find_category_id(&conn, "Dairy").unwrap(), None);
    }

    #[test]
    fn test_insert_and_find_category() {
        let conn = test_conn();
        let id = insert_category(&conn, "Dairy").unwrap();
        assert_eq!(find_category_id(&conn, "Dairy").unwrap(), Some(id));
        assert_eq!(category_name_by_id(&conn, id).unwrap().as_deref(), Some("Dairy"));
    }

    #[test]
    fn test_items_joined_excludes_dangling() {
        let conn = test_conn();
        let dairy = insert_category(&conn, "Dairy").unwrap();
        insert_item(&conn, "Milk", dairy, 2, "fresh").unwrap();
        insert_item(&conn, "Ghost", dairy + 100, 1, "").unwrap();

        let items = select_items_joined(&conn).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].category, "Dairy");

        // The raw row view still sees both
        assert_eq!(select_item_rows(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_rows_in_unknown_category_empty() {
        let conn = test_conn();
        let dairy = insert_category(&conn, "Dairy").unwrap();
        insert_item(&conn, "Milk", dairy, 2, "fresh").unwrap();

        assert!(select_item_rows_in_category(&conn, "Bakery").unwrap().is_empty());
        assert_eq!(select_item_rows_in_category(&conn, "Dairy").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_tables() {
        let conn = test_conn();
        let dairy = insert_category(&conn, "Dairy").unwrap();
        insert_item(&conn, "Milk", dairy, 2, "fresh").unwrap();

        delete_all_categories(&conn).unwrap();
        delete_all_items(&conn).unwrap();

        assert!(select_category_names(&conn).unwrap().is_empty());
        assert!(select_item_rows(&conn).unwrap().is_empty());
    }
}
