//! Data models for inventory database entities

use serde::{Deserialize, Serialize};

/// An item row as stored, with the raw category foreign key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Auto-assigned row id
    pub id: i64,
    /// Item name
    pub name: String,
    /// Foreign key into the Category table
    pub category_id: i64,
    /// Stored quantity (unvalidated, may be negative)
    pub quantity: i64,
    /// Free-form note
    pub note: String,
}

/// An item as returned by the listing operations, with the category
/// name resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Auto-assigned row id
    pub id: i64,
    /// Item name
    pub name: String,
    /// Resolved category name
    pub category: String,
    /// Stored quantity (unvalidated, may be negative)
    pub quantity: i64,
    /// Free-form note
    pub note: String,
}
