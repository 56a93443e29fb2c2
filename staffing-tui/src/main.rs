use std::fs::{self, File};
use std::path::PathBuf;

use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use staffing_lib::seed::seed_if_empty;
use staffing_lib::store::{SqliteBackend, Store};
use staffing_tui::settings::{AppSettings, SettingsProvider};
use staffing_tui::{App, TuiError, event_loop, paths};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TuiError> {
    let (settings, settings_note) = open_settings().await;
    let (config, config_note) = match settings.load().await {
        Ok(config) => (config, None),
        Err(e) => (AppSettings::default(), Some(format!("using default settings: {e}"))),
    };
    init_logging(config.level_filter())?;
    for note in [settings_note, config_note].into_iter().flatten() {
        warn!("{note}");
    }

    let store = open_store().await;
    if config.seed_demo {
        let report = seed_if_empty(&store).await?;
        if report.total() > 0 {
            info!("seeded {} demo records", report.total());
        }
    }

    info!("starting on the {} portal", config.portal.label());
    event_loop::run(App::new(store, settings, &config)).await
}

/// Ensure the parent directory of `path` exists and return the path.
fn prepare(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    Some(path)
}

/// SQLite settings in the data directory, or in memory when that fails.
async fn open_settings() -> (SettingsProvider, Option<String>) {
    let Some(path) = prepare(paths::settings_db()) else {
        return (
            SettingsProvider::in_memory(),
            Some("no data directory, settings will not persist".to_string()),
        );
    };
    match SqliteBackend::open(&path).await {
        Ok(backend) => (SettingsProvider::new(backend), None),
        Err(e) => (
            SettingsProvider::in_memory(),
            Some(format!("settings database {} unavailable: {e}", path.display())),
        ),
    }
}

async fn open_store() -> Store {
    let Some(path) = prepare(paths::records_db()) else {
        warn!("no data directory, records will not persist");
        return Store::in_memory();
    };
    match SqliteBackend::open(&path).await {
        Ok(backend) => {
            info!("records stored in {}", path.display());
            Store::new(backend)
        }
        Err(e) => {
            warn!("record database {} unavailable: {e}", path.display());
            Store::in_memory()
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<(), TuiError> {
    paths::rotate_logs();
    let Some(path) = prepare(paths::log_file()) else {
        return Ok(());
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}
