use rusqlite::Connection;

use crate::error::StorageError;

pub fn create_tables(conn: &Connection) -> Result<(), StorageError> {
    // Buckets table: one JSON document per named collection
    conn.execute(
        "CREATE TABLE IF NOT EXISTS buckets (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
