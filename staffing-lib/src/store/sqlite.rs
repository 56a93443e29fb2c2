//! SQLite backend.
//!
//! The whole `entries` table is read into a DashMap when the database is
//! opened. Reads and prefix scans are answered from that map; writes go to
//! SQLite first and update the map once they succeed.

use std::path::Path;

use async_sqlite::rusqlite;
use async_sqlite::{Client, ClientBuilder};
use async_trait::async_trait;
use dashmap::DashMap;

use super::StoreBackend;
use crate::error::StoreError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS entries (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Write-through SQLite storage.
pub struct SqliteBackend {
    client: Client,
    entries: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Open (or create) the database at `path` and load every entry.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let client = ClientBuilder::new().path(path).open().await?;

        let rows = client
            .conn(|conn| {
                conn.execute(SCHEMA, [])?;
                let mut stmt = conn.prepare("SELECT key, value FROM entries")?;
                let rows = stmt.query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?))
                })?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await?;

        log::debug!("opened {} with {} entries", path.display(), rows.len());
        Ok(Self {
            client,
            entries: rows.into_iter().collect(),
        })
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StoreBackend for SqliteBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let row_key = key.to_string();
        let row_value = value.clone();
        let updated_at = chrono::Utc::now().to_rfc3339();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE
                     SET value = excluded.value, updated_at = excluded.updated_at",
                    rusqlite::params![row_key, row_value, updated_at],
                )
            })
            .await?;

        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let row_key = key.to_string();
        let removed = self
            .client
            .conn(move |conn| conn.execute("DELETE FROM entries WHERE key = ?1", [row_key]))
            .await?;

        if removed > 0 {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}
