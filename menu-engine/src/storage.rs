//! Key-value persistence layer
//!
//! Stores mirror their in-memory collections through this interface as JSON
//! strings under fixed keys. Two implementations:
//!
//! - [`MemoryStore`] — in-process map, used by tests and previews
//! - [`RedbStore`] — durable single-file store backed by redb
//!
//! In-memory store state is always the source of truth; adapter failures are
//! surfaced to callers of `read`/`write` and logged by the stores, never
//! rolled back into the collections.

use async_trait::async_trait;
use dashmap::DashMap;
use redb::{Database, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::warn;

/// Single table holding one JSON document per store key
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

/// Generic async string key-value storage consumed by the stores.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Spawn the background mirror task for one store key and return its queue.
///
/// Payloads are written strictly in queue order by a single task, so a
/// newer mirror can never be overwritten by an older in-flight write.
/// Failures only warn; the task exits once every sender is dropped and the
/// queue drains.
pub(crate) fn spawn_writer(
    storage: Arc<dyn KvStore>,
    key: String,
) -> mpsc::UnboundedSender<String> {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if let Err(err) = storage.write(&key, &payload).await {
                warn!(%err, %key, "failed to mirror store state");
            }
        }
    });
    tx
}

/// In-memory adapter for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// redb-backed adapter. One table, one row per store key.
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open (or create) the database file at `path` and ensure the table
    /// exists so reads never race table creation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _table = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

#[async_trait]
impl KvStore for RedbStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("missing").await.unwrap(), None);

        store.write("k", "v1").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v1"));

        store.write("k", "v2").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn redb_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("kv.redb")).unwrap();

        assert_eq!(store.read("missing").await.unwrap(), None);
        store.write("cart", r#"[{"id":"1"}]"#).await.unwrap();
        assert_eq!(
            store.read("cart").await.unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[tokio::test]
    async fn redb_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.write("menu", "[]").await.unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.read("menu").await.unwrap().as_deref(), Some("[]"));
    }
}
