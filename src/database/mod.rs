//! Database layer for Inventory Core
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - Row-level queries for items and categories
//! - Connection lifecycle

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;
