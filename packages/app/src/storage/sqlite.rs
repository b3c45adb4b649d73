//! SQLite-backed record store

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::broadcast;

use super::{
    RecordChange, RecordKey, RecordStore, StorageError, StorageResult, CHANGE_CHANNEL_CAPACITY,
};

const INIT_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS records (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);";

/// Record store over a single SQLite file
pub struct SqliteStore {
    connection: Mutex<Connection>,
    db_path: String,
    changes: broadcast::Sender<RecordChange>,
}

impl SqliteStore {
    /// Open (or create) the database file, creating parent directories.
    ///
    /// # Example
    /// ```ignore
    /// let store = SqliteStore::open("./data/strivex.db")?;
    /// ```
    pub fn open<P: AsRef<Path>>(db_path: P) -> StorageResult<Self> {
        let path = db_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let connection = Connection::open(path)?;
        connection.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;",
        )?;

        Self::with_connection(connection, path.to_string_lossy().to_string())
    }

    /// In-memory database (for tests)
    pub fn in_memory() -> StorageResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::with_connection(connection, ":memory:".to_string())
    }

    fn with_connection(connection: Connection, db_path: String) -> StorageResult<Self> {
        connection.execute_batch(INIT_SCHEMA)?;
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        tracing::debug!(path = %db_path, "record store opened");

        Ok(Self {
            connection: Mutex::new(connection),
            db_path,
            changes,
        })
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn get_connection(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| StorageError::LockError(e.to_string()))
    }

    /// Remove a record; returns whether it existed
    pub fn delete(&self, key: RecordKey) -> StorageResult<bool> {
        let conn = self.get_connection()?;
        let affected = conn.execute("DELETE FROM records WHERE key = ?1", [key.as_str()])?;
        Ok(affected > 0)
    }
}

impl RecordStore for SqliteStore {
    fn load_raw(&self, key: RecordKey) -> StorageResult<Option<String>> {
        let conn = self.get_connection()?;
        let value = conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                [key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save_batch(&self, records: &[(RecordKey, String)]) -> StorageResult<()> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        let mut written = Vec::with_capacity(records.len());
        for (key, value) in records {
            let current: Option<String> = tx
                .query_row(
                    "SELECT value FROM records WHERE key = ?1",
                    [key.as_str()],
                    |row| row.get(0),
                )
                .optional()?;

            // Unchanged values are not rewritten and do not notify
            if current.as_deref() == Some(value.as_str()) {
                continue;
            }

            tx.execute(
                "INSERT OR REPLACE INTO records (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
                params![key.as_str(), value],
            )?;
            written.push(RecordChange {
                key: *key,
                value: value.clone(),
            });
        }

        tx.commit()?;
        drop(conn);

        for change in written {
            tracing::trace!(key = %change.key, "record changed");
            // No subscribers is fine
            let _ = self.changes.send(change);
        }

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<RecordChange> {
        self.changes.subscribe()
    }
}
