use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use rusqlite::{Connection, OptionalExtension};

use crate::error::StorageError;

/// Names of the persisted buckets, injected into the repository at
/// construction. Defaults cover the five collections the app stores.
#[derive(Debug, Clone)]
pub struct BucketKeys {
    pub workouts: String,
    pub weekly_goals: String,
    pub custom_types: String,
    pub user: String,
    pub rest_days: String,
}

impl Default for BucketKeys {
    fn default() -> Self {
        Self {
            workouts: "workouts".to_string(),
            weekly_goals: "weekly_goals".to_string(),
            custom_types: "custom_types".to_string(),
            user: "user".to_string(),
            rest_days: "rest_days".to_string(),
        }
    }
}

/// Key/value access to JSON documents. Implementations must not panic;
/// every failure is a `StorageError` the repository can pass upward.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Durable store backed by a single SQLite table. A connection is opened
/// per operation against a fixed path; writes are last-writer-wins.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_path` and ensures the
    /// schema exists.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let db_path = db_path.into();
        super::init_database(&db_path)?;
        Ok(Self { db_path })
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        Ok(Connection::open(&self.db_path)?)
    }
}

impl BlobStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.connect()?;
        let value = conn
            .query_row("SELECT value FROM buckets WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.connect()?;
        let now = chrono::Utc::now().timestamp();
        conn.execute(
            "INSERT INTO buckets (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            rusqlite::params![key, value, now],
        )?;
        Ok(())
    }
}

/// Volatile store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
