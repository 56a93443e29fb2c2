//! Storage error types

use super::ValidationError;

/// Errors from the storage port.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// SQLite backend failure.
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),

    /// A stored blob could not be encoded or decoded.
    #[error("serialization error in {key}: {source}")]
    Serialization {
        /// Storage key of the blob.
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No record with this id exists in the collection.
    #[error("{collection} record {id} not found")]
    NotFound {
        collection: &'static str,
        id: String,
    },

    /// A record with this id already exists in the collection.
    #[error("{collection} record {id} already exists")]
    Duplicate {
        collection: &'static str,
        id: String,
    },

    /// The record failed validation and was not written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a serialization error for a storage key.
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            key: key.into(),
            source,
        }
    }

    /// Returns `true` if the error came from record validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if the error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
