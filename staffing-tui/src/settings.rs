//! Typed settings stored next to the records.
//!
//! Values are bincode blobs under `settings:` keys of a [`StoreBackend`],
//! so the same SQLite or in-memory backends serve both.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use simplelog::LevelFilter;
use thiserror::Error;

use staffing_lib::error::StoreError;
use staffing_lib::model::Portal;
use staffing_lib::store::{MemoryBackend, StoreBackend};

pub const PORTAL: &str = "settings:portal";
pub const LATENCY_MS: &str = "settings:latency_ms";
pub const SEED_DEMO: &str = "settings:seed_demo";
pub const LOG_LEVEL: &str = "settings:log_level";

/// Simulated network latency used when nothing is stored.
pub const DEFAULT_LATENCY_MS: u64 = 400;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error for {key}: {source}")]
    Deserialization {
        key: String,
        #[source]
        source: bincode::Error,
    },
}

/// Typed settings provider.
///
/// Wraps a `StoreBackend` with typed serialization via bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn StoreBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map(Some)
                .map_err(|source| SettingsError::Deserialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await?;
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key).await?;
        Ok(())
    }

    pub async fn keys(&self) -> Result<Vec<String>, SettingsError> {
        Ok(self.backend.keys_with_prefix("settings:").await?)
    }

    /// Read every known setting, filling in defaults.
    pub async fn load(&self) -> Result<AppSettings, SettingsError> {
        let defaults = AppSettings::default();
        Ok(AppSettings {
            portal: self.get_or(PORTAL, defaults.portal).await?,
            latency_ms: self.get_or(LATENCY_MS, defaults.latency_ms).await?,
            seed_demo: self.get_or(SEED_DEMO, defaults.seed_demo).await?,
            log_level: self.get_or(LOG_LEVEL, defaults.log_level).await?,
        })
    }

    pub async fn save(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        self.set(PORTAL, &settings.portal).await?;
        self.set(LATENCY_MS, &settings.latency_ms).await?;
        self.set(SEED_DEMO, &settings.seed_demo).await?;
        self.set(LOG_LEVEL, &settings.log_level).await
    }
}

impl std::fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProvider").finish_non_exhaustive()
    }
}

/// Settings read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Portal opened at startup and the last one chosen with `p`.
    pub portal: Portal,
    pub latency_ms: u64,
    /// Fill empty collections with demo records on startup.
    pub seed_demo: bool,
    pub log_level: String,
}

impl AppSettings {
    /// Parsed log level, `Info` when the stored name is unknown.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            portal: Portal::Admin,
            latency_ms: DEFAULT_LATENCY_MS,
            seed_demo: true,
            log_level: "debug".to_string(),
        }
    }
}
