//! Record types

mod candidate;
mod compliance;
mod occupation;
mod portal;
mod vendor;

pub use candidate::*;
pub use compliance::*;
pub use occupation::*;
pub use portal::*;
pub use vendor::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// A record kept in a named collection of the store.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name, used as part of the storage key.
    const COLLECTION: &'static str;

    /// Unique id within the collection.
    fn id(&self) -> &str;

    /// Checks the record before it is written.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Generates a new record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Short date used in table cells.
pub(crate) fn short_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
