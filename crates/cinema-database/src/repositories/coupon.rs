//! Coupon repository implementation.
//!
//! Coupons are looked up exclusively through the deterministic `code_hash`
//! column; the plaintext never reaches this layer.

use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::coupon::{Coupon, CouponStatus};

/// Repository for discount coupons.
#[derive(Debug, Clone)]
pub struct CouponRepository {
    pool: PgPool,
}

impl CouponRepository {
    /// Create a new coupon repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether a coupon with this lookup hash exists (any status).
    pub async fn exists_by_hash(&self, code_hash: &str) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM coupons WHERE code_hash = $1)")
            .bind(code_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check coupon existence", e)
            })
    }

    /// Insert a new active coupon.
    pub async fn insert(&self, code_hash: &str, code_encrypted: &str) -> AppResult<Coupon> {
        sqlx::query_as::<_, Coupon>(
            "INSERT INTO coupons (id, code_hash, code_encrypted, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(code_hash)
        .bind(code_encrypted)
        .bind(CouponStatus::Active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("coupons_code_hash_key") =>
            {
                AppError::conflict("Coupon already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert coupon", e),
        })
    }

    /// Find an active coupon by its lookup hash.
    pub async fn find_active_by_hash(&self, code_hash: &str) -> AppResult<Option<Coupon>> {
        sqlx::query_as::<_, Coupon>(
            "SELECT * FROM coupons WHERE code_hash = $1 AND status = $2",
        )
        .bind(code_hash)
        .bind(CouponStatus::Active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find coupon", e))
    }

    /// Flip an active coupon to redeemed, returning the updated row.
    ///
    /// Returns `None` when no active coupon matches, which callers report
    /// benignly rather than as an error.
    pub async fn redeem_by_hash(&self, code_hash: &str) -> AppResult<Option<Coupon>> {
        sqlx::query_as::<_, Coupon>(
            "UPDATE coupons SET status = $2, redeemed_at = NOW() \
             WHERE code_hash = $1 AND status = $3 \
             RETURNING *",
        )
        .bind(code_hash)
        .bind(CouponStatus::Redeemed)
        .bind(CouponStatus::Active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to redeem coupon", e))
    }

    /// Count active coupons.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM coupons WHERE status = $1")
            .bind(CouponStatus::Active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count coupons", e))
    }
}
