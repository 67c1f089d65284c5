use rusqlite::Connection;
use std::path::Path;

pub mod repository;
pub mod schema;
pub mod store;

use crate::error::StorageError;

pub fn init_database(db_path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(db_path)?;

    // Enable WAL mode
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    conn.pragma_update(None, "synchronous", &"NORMAL")?;

    // Create schema
    schema::create_tables(&conn)?;

    Ok(conn)
}
