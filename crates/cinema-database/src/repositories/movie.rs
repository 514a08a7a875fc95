//! Movie repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::movie::{CreateMovie, Movie, UpdateMovie};

/// Repository for movie catalog CRUD operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a movie by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find movie by id", e)
            })
    }

    /// List all movies, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Create a new movie.
    pub async fn create(&self, data: &CreateMovie) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (id, title, synopsis, ticket_price, image) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.synopsis)
        .bind(data.ticket_price)
        .bind(&data.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("movies_title_key") => {
                AppError::conflict(format!("Movie title '{}' already exists", data.title))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create movie", e),
        })
    }

    /// Update a movie's catalog fields.
    pub async fn update(&self, id: Uuid, data: &UpdateMovie) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET title = COALESCE($2, title), \
                               synopsis = COALESCE($3, synopsis), \
                               ticket_price = COALESCE($4, ticket_price) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.synopsis)
        .bind(data.ticket_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("movies_title_key") => {
                AppError::conflict("Movie title already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update movie", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Movie {id} not found")))
    }

    /// Delete a movie, returning its stored poster filename if it existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>("DELETE FROM movies WHERE id = $1 RETURNING image")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))
    }

    /// Count all movies.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count movies", e))
    }
}
