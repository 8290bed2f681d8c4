//! One-time schema creation.
//!
//! The service owns a single table. Creation uses `IF NOT EXISTS` so it is
//! safe to run against a store that has already been initialized.

use rusqlite::Connection;
use tracing::debug;

use crate::error::StoreResult;

/// DDL for the `items` table.
pub(crate) const ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id    INTEGER PRIMARY KEY AUTOINCREMENT,
        name  TEXT NOT NULL,
        value TEXT NOT NULL
    );
"#;

/// Ensure every table the service needs exists.
pub fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(ITEMS_TABLE)?;
    debug!("items table ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'items'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn creates_items_table() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert_eq!(table_count(&conn), 1);
    }

    #[test]
    fn is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO items (name, value) VALUES ('a', 'b')",
            [],
        )
        .unwrap();

        ensure_schema(&conn).unwrap();

        let rows: i64 = conn
            .query_row("SELECT count(*) FROM items", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(table_count(&conn), 1);
    }

    #[test]
    fn name_and_value_are_required() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let result = conn.execute("INSERT INTO items (name) VALUES ('only-name')", []);
        assert!(result.is_err());
    }
}
