//! Movie catalog management.

use std::sync::Arc;

use bytes::Bytes;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use cinema_core::{AppError, AppResult};
use cinema_database::repositories::MovieRepository;
use cinema_entity::movie::{CreateMovie, Movie, UpdateMovie};
use cinema_storage::PosterStore;

/// Data for creating a movie. The poster arrives as raw multipart bytes.
#[derive(Debug, Clone)]
pub struct NewMovie {
    /// Movie title, unique across the catalog.
    pub title: String,
    /// Optional synopsis.
    pub synopsis: Option<String>,
    /// Ticket price in whole currency units.
    pub ticket_price: Decimal,
    /// Client-supplied poster filename, used only for its extension.
    pub poster_filename: String,
    /// Poster file contents.
    pub poster_bytes: Bytes,
}

/// Manages the movie catalog and its poster files.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Movie repository.
    movie_repo: Arc<MovieRepository>,
    /// Poster file store.
    poster_store: Arc<PosterStore>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(movie_repo: Arc<MovieRepository>, poster_store: Arc<PosterStore>) -> Self {
        Self {
            movie_repo,
            poster_store,
        }
    }

    /// Create a movie, persisting its poster first.
    pub async fn create(&self, data: NewMovie) -> AppResult<Movie> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if data.ticket_price <= Decimal::ZERO {
            return Err(AppError::validation("Ticket price must be positive"));
        }
        if data.poster_bytes.is_empty() {
            return Err(AppError::validation("Poster image is required"));
        }

        let image = self
            .poster_store
            .save(&data.poster_filename, data.poster_bytes)
            .await?;

        let created = self
            .movie_repo
            .create(&CreateMovie {
                title: title.to_string(),
                synopsis: data.synopsis,
                ticket_price: data.ticket_price,
                image: image.clone(),
            })
            .await;

        match created {
            Ok(movie) => {
                info!(movie_id = %movie.id, title = %movie.title, "Movie created");
                Ok(movie)
            }
            Err(err) => {
                // The insert failed; don't leave the poster file orphaned.
                if let Err(cleanup) = self.poster_store.delete(&image).await {
                    warn!(image = %image, error = %cleanup, "Failed to remove orphaned poster");
                }
                Err(err)
            }
        }
    }

    /// All movies, newest first.
    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.find_all().await
    }

    /// Partially update a movie's catalog fields.
    pub async fn update(&self, id: Uuid, data: UpdateMovie) -> AppResult<Movie> {
        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Title cannot be empty"));
            }
        }
        if let Some(price) = data.ticket_price {
            if price <= Decimal::ZERO {
                return Err(AppError::validation("Ticket price must be positive"));
            }
        }

        self.movie_repo.update(id, &data).await
    }

    /// Delete a movie and best-effort delete its stored poster.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        match self.movie_repo.delete(id).await? {
            Some(image) => {
                if let Err(err) = self.poster_store.delete(&image).await {
                    warn!(movie_id = %id, image = %image, error = %err, "Failed to delete poster");
                }
                info!(movie_id = %id, "Movie deleted");
                Ok(())
            }
            None => Err(AppError::not_found(format!("Movie {id} not found"))),
        }
    }
}
