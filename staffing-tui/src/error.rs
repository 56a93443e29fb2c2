//! Error type for the terminal front end.

use thiserror::Error;

use staffing_lib::error::StoreError;

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
