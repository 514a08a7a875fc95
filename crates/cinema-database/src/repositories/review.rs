//! Review repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::review::{CreateReview, Review, ReviewWithUsername};

/// Repository for movie reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new review.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, movie_id, user_id, review, rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.movie_id)
        .bind(data.user_id)
        .bind(&data.review)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reviews_movie_id_fkey") =>
            {
                AppError::not_found(format!("Movie {} not found", data.movie_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }

    /// Reviews for one movie, newest first, annotated with usernames.
    pub async fn find_by_movie(&self, movie_id: Uuid) -> AppResult<Vec<ReviewWithUsername>> {
        sqlx::query_as::<_, ReviewWithUsername>(
            "SELECT r.review, r.rating, u.username \
             FROM reviews r \
             LEFT JOIN users u ON u.id = r.user_id \
             WHERE r.movie_id = $1 \
             ORDER BY r.created_at DESC",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }
}
