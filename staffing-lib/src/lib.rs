//! Staffing portal records and storage
//!
//! Record types for the portals, field validation, a key-value storage port
//! with in-memory and SQLite backends, demo seed data and summary totals.

pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod summary;
