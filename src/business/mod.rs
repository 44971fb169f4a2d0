//! Business logic layer for Inventory Core
//!
//! This module provides the high-level InventoryStore API for adding,
//! listing, and clearing inventory items and their categories.

pub mod store;
pub mod items;
pub mod categories;

pub use store::InventoryStore;
