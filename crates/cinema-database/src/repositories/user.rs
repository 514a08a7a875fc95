//! Read-only user queries.
//!
//! Users are owned by an external authentication system; this repository
//! covers only the surface the booking system needs.

use sqlx::PgPool;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;

/// Repository for the minimal user surface.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
