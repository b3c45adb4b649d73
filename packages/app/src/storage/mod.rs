//! Local record storage
//!
//! Provides the three persistent records of the app:
//! - Player stats (persistent across days)
//! - Weekly quest template
//! - Daily progress (replaced at rollover)
//!
//! Records are stored as JSON strings. Writers publish a [`RecordChange`] so
//! other consumers in the same process can refresh.

// ============================================================
// Submodules
// ============================================================

pub mod sqlite;

pub use sqlite::SqliteStore;

// ============================================================
// Imports
// ============================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::broadcast;

// ============================================================
// Errors
// ============================================================

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to acquire lock: {0}")]
    LockError(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================
// Keys and change events
// ============================================================

/// Capacity of the change notification channel
pub const CHANGE_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    PlayerStats,
    WeeklyQuest,
    DailyProgress,
}

impl RecordKey {
    pub const ALL: [RecordKey; 3] = [
        RecordKey::PlayerStats,
        RecordKey::WeeklyQuest,
        RecordKey::DailyProgress,
    ];

    /// Stable storage key, shared with the browser client
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::PlayerStats => "strivex_player_stats",
            RecordKey::WeeklyQuest => "strivex_weekly_quest",
            RecordKey::DailyProgress => "strivex_daily_progress",
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published after a record's stored value actually changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    pub key: RecordKey,
    pub value: String,
}

// ============================================================
// Store trait
// ============================================================

/// Key-value store for the app records
pub trait RecordStore: Send + Sync {
    /// Raw JSON for `key`, `None` when never written
    fn load_raw(&self, key: RecordKey) -> StorageResult<Option<String>>;

    /// Write every record or none of them
    fn save_batch(&self, records: &[(RecordKey, String)]) -> StorageResult<()>;

    fn subscribe(&self) -> broadcast::Receiver<RecordChange>;

    fn save_raw(&self, key: RecordKey, value: String) -> StorageResult<()> {
        self.save_batch(&[(key, value)])
    }
}

/// Typed read for the mutation path.
///
/// A missing key or corrupt JSON yields `default`; a failed read is returned
/// so callers never write defaults over records they could not see.
pub fn try_load_record<T, S>(
    store: &S,
    key: RecordKey,
    default: impl FnOnce() -> T,
) -> StorageResult<T>
where
    T: DeserializeOwned,
    S: RecordStore + ?Sized,
{
    let raw = store.load_raw(key)?;
    Ok(decode_or_default(key, raw, default))
}

/// Typed read for display; read failures are logged and yield `default`.
pub fn load_record<T, S>(store: &S, key: RecordKey, default: impl FnOnce() -> T) -> T
where
    T: DeserializeOwned,
    S: RecordStore + ?Sized,
{
    match store.load_raw(key) {
        Ok(raw) => decode_or_default(key, raw, default),
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "failed to read record, using default");
            default()
        }
    }
}

fn decode_or_default<T: DeserializeOwned>(
    key: RecordKey,
    raw: Option<String>,
    default: impl FnOnce() -> T,
) -> T {
    let Some(raw) = raw else {
        return default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "corrupt record, using default");
            default()
        }
    }
}

pub fn encode_record<T: Serialize>(
    key: RecordKey,
    value: &T,
) -> StorageResult<(RecordKey, String)> {
    Ok((key, serde_json::to_string(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strivex_algo::PlayerStats;

    #[test]
    fn test_record_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            RecordKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), RecordKey::ALL.len());
    }

    #[test]
    fn test_load_record_missing_uses_default() {
        let store = SqliteStore::in_memory().expect("Failed to create in-memory store");
        let stats: PlayerStats = load_record(&store, RecordKey::PlayerStats, PlayerStats::initial);
        assert_eq!(stats, PlayerStats::initial());
    }

    #[test]
    fn test_load_record_corrupt_uses_default() {
        let store = SqliteStore::in_memory().expect("Failed to create in-memory store");
        store
            .save_raw(RecordKey::PlayerStats, "{not json".to_string())
            .expect("Failed to save");
        let stats: PlayerStats = load_record(&store, RecordKey::PlayerStats, PlayerStats::initial);
        assert_eq!(stats, PlayerStats::initial());
    }

    #[test]
    fn test_try_load_record_missing_and_corrupt_use_default() {
        let store = SqliteStore::in_memory().expect("Failed to create in-memory store");
        let stats: PlayerStats =
            try_load_record(&store, RecordKey::PlayerStats, PlayerStats::initial).unwrap();
        assert_eq!(stats, PlayerStats::initial());

        store
            .save_raw(RecordKey::PlayerStats, "[1,".to_string())
            .expect("Failed to save");
        let stats: PlayerStats =
            try_load_record(&store, RecordKey::PlayerStats, PlayerStats::initial).unwrap();
        assert_eq!(stats, PlayerStats::initial());
    }

    #[test]
    fn test_encode_and_load_record() {
        let store = SqliteStore::in_memory().expect("Failed to create in-memory store");
        let mut stats = PlayerStats::initial();
        stats.level = 7;
        let record = encode_record(RecordKey::PlayerStats, &stats).expect("Failed to encode");
        store.save_batch(&[record]).expect("Failed to save");

        let loaded: PlayerStats = load_record(&store, RecordKey::PlayerStats, PlayerStats::initial);
        assert_eq!(loaded.level, 7);
    }
}
