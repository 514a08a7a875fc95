//! Crate-wide result alias.

use crate::error::AppError;

/// `Result` with [`AppError`] as the error type, used across every
/// PulseCinema crate.
pub type AppResult<T> = Result<T, AppError>;
