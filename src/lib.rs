//! # Inventory Core
//!
//! An embedded persistence library for a small inventory tracker.
//!
//! ## Features
//!
//! - SQLite database storage (single file, created on first open)
//! - Two-table domain: categories and the items that reference them
//! - Lookup-or-create category resolution on every item insert
//! - Filtered and unfiltered item listing with resolved category names
//! - Bulk delete of all stored records
//!
//! ## Example
//!
//! ```no_run
//! use invcore::InventoryStore;
//! use std::path::Path;
//!
//! let mut store = InventoryStore::open(Path::new("/path/to/data")).unwrap();
//! store.add_item("Milk", "Dairy", 2, "fresh").unwrap();
//!
//! for item in store.list_all().unwrap() {
//!     println!("{} ({}): {}", item.name, item.category, item.quantity);
//! }
//! ```

pub mod database;
pub mod business;
pub mod error;

// Re-export main types
pub use error::{StoreError, Result};
pub use database::models::{Item, ItemRow};
pub use business::InventoryStore;

/// Database filename
pub const DATABASE_FILENAME: &str = "inventory.sqlite";
