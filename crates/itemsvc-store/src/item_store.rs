//! Item persistence.
//!
//! [`ItemStore`] maps the `items` table onto [`Item`] values. The web layer
//! talks to it through the [`ItemRepository`] trait so tests can swap in
//! their own implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::{StoreError, StoreResult};

// ═══════════════════════════════════════════════════════════════════════
//  Types
// ═══════════════════════════════════════════════════════════════════════

/// A persisted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Row ID assigned by the store on insert.
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
    /// Opaque payload.
    pub value: String,
}

/// The mutable fields of an item, as supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub value: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attach a store-assigned `id`.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            value: self.value,
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.name.is_empty() {
            return Err(StoreError::InvalidArgument(
                "item name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  ItemRepository
// ═══════════════════════════════════════════════════════════════════════

/// Data operations the item service needs from its backing store.
///
/// `update` and `delete` report whether a row matched `id`; deciding what
/// a miss means is left to the caller.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, ordered by `id` ascending.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Point lookup. Absence is [`StoreError::NotFound`].
    async fn get(&self, id: i64) -> StoreResult<Item>;

    /// Persist a new row and return it with its assigned `id`.
    async fn insert(&self, item: NewItem) -> StoreResult<Item>;

    /// Overwrite `name` and `value` of row `id`.
    async fn update(&self, id: i64, item: NewItem) -> StoreResult<bool>;

    /// Remove row `id`.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

// ═══════════════════════════════════════════════════════════════════════
//  ItemStore
// ═══════════════════════════════════════════════════════════════════════

/// SQLite-backed [`ItemRepository`].
#[derive(Clone)]
pub struct ItemStore {
    db: Database,
}

impl ItemStore {
    /// Create a new item store backed by `db`.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        value: row.get(2)?,
    })
}

#[async_trait]
impl ItemRepository for ItemStore {
    #[instrument(skip(self))]
    async fn list(&self) -> StoreResult<Vec<Item>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare("SELECT id, name, value FROM items ORDER BY id ASC")?;
                let rows = stmt
                    .query_map([], row_to_item)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rows)
            })
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> StoreResult<Item> {
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, name, value FROM items WHERE id = ?1",
                    rusqlite::params![id],
                    row_to_item,
                )
                .map_err(|e| match e {
                    rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound {
                        entity: "item",
                        id: id.to_string(),
                    },
                    other => StoreError::Sqlite(other),
                })
            })
            .await
    }

    #[instrument(skip(self, item))]
    async fn insert(&self, item: NewItem) -> StoreResult<Item> {
        item.check()?;
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO items (name, value) VALUES (?1, ?2)",
                    rusqlite::params![item.name, item.value],
                )?;
                let id = conn.last_insert_rowid();
                debug!(item_id = id, "item inserted");
                Ok(item.with_id(id))
            })
            .await
    }

    #[instrument(skip(self, item))]
    async fn update(&self, id: i64, item: NewItem) -> StoreResult<bool> {
        item.check()?;
        self.db
            .execute(move |conn| {
                let changed = conn.execute(
                    "UPDATE items SET name = ?1, value = ?2 WHERE id = ?3",
                    rusqlite::params![item.name, item.value, id],
                )?;
                debug!(item_id = id, changed, "item updated");
                Ok(changed > 0)
            })
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.db
            .execute(move |conn| {
                let deleted = conn.execute("DELETE FROM items WHERE id = ?1", rusqlite::params![id])?;
                debug!(item_id = id, deleted, "item deleted");
                Ok(deleted > 0)
            })
            .await
    }
}

// ── tests ────────────────────────────────────────────────────────────
