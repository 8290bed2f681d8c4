//! # itemsvc-store
//!
//! Storage adapter for itemsvc.
//!
//! Owns the single SQLite connection for the process and exposes item
//! persistence through the [`ItemRepository`] trait.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ItemRepository (async trait)           │
//! │    └── ItemStore  (items table)         │
//! ├─────────────────────────────────────────┤
//! │  Database (rusqlite WAL, spawn_blocking)│
//! │  Schema   (CREATE TABLE IF NOT EXISTS)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use itemsvc_store::{Database, ItemRepository, ItemStore, NewItem};
//!
//! let db = Database::open_and_init("data/items.db").await?;
//! let items = ItemStore::new(db);
//! let created = items.insert(NewItem::new("greeting", "hello")).await?;
//! ```

pub mod db;
pub mod error;
pub mod item_store;
pub mod schema;

// ── re-exports ───────────────────────────────────────────────────────

pub use db::Database;
pub use error::{StoreError, StoreResult};
pub use item_store::{Item, ItemRepository, ItemStore, NewItem};
