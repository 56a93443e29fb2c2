//! Storage port
//!
//! Records live in flat key-value blobs, one JSON array per collection.
//! `StoreBackend` moves raw bytes; `Repository` gives typed CRUD over a
//! collection on top of any backend.

mod memory;
mod repository;
mod sqlite;

pub use memory::*;
pub use repository::*;
pub use sqlite::*;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::Entity;

/// Backend trait for raw byte storage.
///
/// Implementations handle storage and retrieval of opaque blobs by key.
/// `CollectionStore` wraps this with typed JSON collections.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Get raw bytes for a key.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Set raw bytes for a key.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Get all keys matching a prefix.
    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

/// Handle to a backend that hands out typed repositories.
///
/// # Example
///
/// ```
/// use staffing_lib::model::Vendor;
/// use staffing_lib::store::Store;
///
/// let store = Store::in_memory();
/// let vendors = store.repository::<Vendor>();
/// ```
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
}

impl Store {
    /// Create a store over the given backend.
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a store that keeps everything in memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// The underlying backend.
    pub fn backend(&self) -> Arc<dyn StoreBackend> {
        self.backend.clone()
    }

    /// Typed repository for one collection.
    pub fn repository<E: Entity>(&self) -> CollectionStore<E> {
        CollectionStore::new(self.backend.clone())
    }

    /// Names of collections that have been written.
    pub async fn collections(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self
            .backend
            .keys_with_prefix(COLLECTION_PREFIX)
            .await?
            .into_iter()
            .filter_map(|k| k.strip_prefix(COLLECTION_PREFIX).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
