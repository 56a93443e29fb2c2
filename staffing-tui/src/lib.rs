//! Terminal front end for the staffing portal.

pub mod app;
pub mod error;
pub mod event_loop;
pub mod filter;
pub mod paths;
pub mod screens;
pub mod settings;
pub mod terminal;

pub use app::App;
pub use error::TuiError;
