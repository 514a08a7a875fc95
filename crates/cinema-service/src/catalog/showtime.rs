//! Showtime scheduling.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cinema_core::{AppError, AppResult};
use cinema_database::repositories::{MovieRepository, ShowtimeRepository};
use cinema_entity::showtime::{CreateShowtime, ShowtimeWithTitle};

/// Manages screening schedules.
#[derive(Debug, Clone)]
pub struct ShowtimeService {
    /// Showtime repository.
    showtime_repo: Arc<ShowtimeRepository>,
    /// Movie repository, used to verify the scheduled movie exists.
    movie_repo: Arc<MovieRepository>,
}

impl ShowtimeService {
    /// Creates a new showtime service.
    pub fn new(showtime_repo: Arc<ShowtimeRepository>, movie_repo: Arc<MovieRepository>) -> Self {
        Self {
            showtime_repo,
            movie_repo,
        }
    }

    /// Schedule screening times for a movie on one date.
    pub async fn create(&self, data: CreateShowtime) -> AppResult<ShowtimeWithTitle> {
        let times: Vec<String> = data
            .times
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if times.is_empty() {
            return Err(AppError::validation("At least one showtime is required"));
        }

        let mut seen = HashSet::new();
        for time in &times {
            if !seen.insert(time.as_str()) {
                return Err(AppError::validation(format!("Duplicate showtime: {time}")));
            }
        }

        let Some(movie) = self.movie_repo.find_by_id(data.movie_id).await? else {
            return Err(AppError::not_found(format!(
                "Movie {} not found",
                data.movie_id
            )));
        };

        let created = self
            .showtime_repo
            .create(&CreateShowtime {
                movie_id: data.movie_id,
                show_date: data.show_date,
                times,
            })
            .await?;

        info!(
            showtime_id = %created.id,
            movie_id = %created.movie_id,
            date = %created.show_date,
            "Showtime scheduled"
        );

        Ok(ShowtimeWithTitle {
            id: created.id,
            movie_id: created.movie_id,
            movie_title: movie.title,
            show_date: created.show_date,
            times: created.times,
        })
    }

    /// All showtimes annotated with their movie title.
    pub async fn list(&self) -> AppResult<Vec<ShowtimeWithTitle>> {
        self.showtime_repo.find_all_with_titles().await
    }

    /// Delete a showtime. Deleting an absent id is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.showtime_repo.delete(id).await
    }
}
