//! Typed CRUD over a collection blob.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use super::StoreBackend;
use crate::error::StoreError;
use crate::model::Entity;

/// Key prefix of collection blobs.
pub const COLLECTION_PREFIX: &str = "collection:";

/// CRUD capabilities for one record type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    /// The record with `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<E>, StoreError>;

    /// Validate and append a record. Fails on a duplicate id.
    async fn add(&self, record: E) -> Result<E, StoreError>;

    /// Validate and replace the record with the same id.
    async fn update(&self, record: E) -> Result<E, StoreError>;

    /// Remove the record with `id`.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Remove several records; returns how many existed.
    async fn delete_many(&self, ids: &[String]) -> Result<usize, StoreError> {
        let mut removed = 0;
        for id in ids {
            match self.delete(id).await {
                Ok(()) => removed += 1,
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }
}

/// Repository that keeps a whole collection as one JSON array under
/// `collection:<name>`.
///
/// Every write rewrites the array. Callers are expected to be the only
/// writer of a collection at a time.
pub struct CollectionStore<E> {
    backend: Arc<dyn StoreBackend>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> CollectionStore<E> {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self {
            backend,
            _marker: PhantomData,
        }
    }

    /// Storage key of this collection.
    pub fn key() -> String {
        format!("{COLLECTION_PREFIX}{}", E::COLLECTION)
    }

    async fn load(&self) -> Result<Vec<E>, StoreError> {
        let key = Self::key();
        match self.backend.get_bytes(&key).await? {
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StoreError::serialization(key, e))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, records: &[E]) -> Result<(), StoreError> {
        let key = Self::key();
        let bytes =
            serde_json::to_vec(records).map_err(|e| StoreError::serialization(&key, e))?;
        self.backend.set_bytes(&key, bytes).await
    }

    fn not_found(id: &str) -> StoreError {
        StoreError::NotFound {
            collection: E::COLLECTION,
            id: id.to_string(),
        }
    }

    /// Replace the whole collection.
    pub async fn replace_all(&self, records: Vec<E>) -> Result<(), StoreError> {
        for record in &records {
            record.validate()?;
        }
        self.save(&records).await
    }
}

impl<E> Clone for CollectionStore<E> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for CollectionStore<E> {
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        self.load().await
    }

    async fn get(&self, id: &str) -> Result<Option<E>, StoreError> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn add(&self, record: E) -> Result<E, StoreError> {
        record.validate()?;
        let mut records = self.load().await?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Duplicate {
                collection: E::COLLECTION,
                id: record.id().to_string(),
            });
        }
        records.push(record.clone());
        self.save(&records).await?;
        log::debug!("added {} record {}", E::COLLECTION, record.id());
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, StoreError> {
        record.validate()?;
        let mut records = self.load().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;
        *slot = record.clone();
        self.save(&records).await?;
        log::debug!("updated {} record {}", E::COLLECTION, record.id());
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        self.save(&records).await?;
        log::debug!("deleted {} record {}", E::COLLECTION, id);
        Ok(())
    }
}
