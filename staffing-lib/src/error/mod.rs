//! Error types

mod store;
mod validation;

pub use store::*;
pub use validation::*;
