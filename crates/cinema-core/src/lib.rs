//! # cinema-core
//!
//! Foundation shared by every PulseCinema crate: configuration schemas,
//! the error taxonomy, the common result alias, and the payment provider
//! abstraction. Depends on nothing else in the workspace.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
