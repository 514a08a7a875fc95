//! Showtime repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::showtime::{CreateShowtime, Showtime, ShowtimeWithTitle};

/// Repository for showtime CRUD and listing operations.
#[derive(Debug, Clone)]
pub struct ShowtimeRepository {
    pool: PgPool,
}

impl ShowtimeRepository {
    /// Create a new showtime repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new showtime.
    pub async fn create(&self, data: &CreateShowtime) -> AppResult<Showtime> {
        sqlx::query_as::<_, Showtime>(
            "INSERT INTO showtimes (id, movie_id, show_date, times) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.movie_id)
        .bind(data.show_date)
        .bind(&data.times)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create showtime", e))
    }

    /// List all showtimes annotated with their movie title.
    pub async fn find_all_with_titles(&self) -> AppResult<Vec<ShowtimeWithTitle>> {
        sqlx::query_as::<_, ShowtimeWithTitle>(
            "SELECT s.id, s.movie_id, m.title AS movie_title, s.show_date, s.times \
             FROM showtimes s \
             JOIN movies m ON m.id = s.movie_id \
             ORDER BY s.show_date, s.created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list showtimes", e))
    }

    /// Delete a showtime. Deleting an absent id is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM showtimes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete showtime", e)
            })?;
        Ok(())
    }
}
