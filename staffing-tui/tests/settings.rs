use simplelog::LevelFilter;
use staffing_lib::model::Portal;
use staffing_lib::store::{MemoryBackend, StoreBackend};
use staffing_tui::settings::{
    AppSettings, DEFAULT_LATENCY_MS, LATENCY_MS, PORTAL, SettingsError, SettingsProvider,
};

#[tokio::test]
async fn test_missing_key_is_none() {
    let settings = SettingsProvider::in_memory();
    assert_eq!(settings.get::<u64>(LATENCY_MS).await.unwrap(), None);
    assert_eq!(settings.get_or(LATENCY_MS, 7u64).await.unwrap(), 7);
}

#[tokio::test]
async fn test_typed_round_trip() {
    let settings = SettingsProvider::in_memory();
    settings.set(PORTAL, &Portal::Vendor).await.unwrap();
    assert_eq!(settings.get::<Portal>(PORTAL).await.unwrap(), Some(Portal::Vendor));

    settings.delete(PORTAL).await.unwrap();
    assert_eq!(settings.get::<Portal>(PORTAL).await.unwrap(), None);
}

#[tokio::test]
async fn test_load_fills_defaults() {
    let settings = SettingsProvider::in_memory();
    let loaded = settings.load().await.unwrap();
    assert_eq!(loaded, AppSettings::default());
    assert_eq!(loaded.latency_ms, DEFAULT_LATENCY_MS);
    assert_eq!(loaded.portal, Portal::Admin);
}

#[tokio::test]
async fn test_save_then_load() {
    let settings = SettingsProvider::in_memory();
    let custom = AppSettings {
        portal: Portal::Organization,
        latency_ms: 0,
        seed_demo: false,
        log_level: "warn".to_string(),
    };
    settings.save(&custom).await.unwrap();

    assert_eq!(settings.load().await.unwrap(), custom);
    assert_eq!(settings.keys().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_garbage_bytes_fail_to_deserialize() {
    let backend = MemoryBackend::new();
    backend.set_bytes(LATENCY_MS, vec![1]).await.unwrap();
    let settings = SettingsProvider::new(backend);

    let err = settings.get::<u64>(LATENCY_MS).await.unwrap_err();
    assert!(matches!(err, SettingsError::Deserialization { .. }));
}

#[test]
fn test_level_filter_parsing() {
    let mut config = AppSettings::default();
    assert_eq!(config.level_filter(), LevelFilter::Debug);

    config.log_level = "TRACE".into();
    assert_eq!(config.level_filter(), LevelFilter::Trace);

    config.log_level = "loud".into();
    assert_eq!(config.level_filter(), LevelFilter::Info);
}
