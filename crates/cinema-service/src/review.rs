//! Movie review submission and listing.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cinema_core::{AppError, AppResult};
use cinema_database::repositories::ReviewRepository;
use cinema_entity::review::{CreateReview, Review, ReviewWithUsername};

/// Handles movie reviews.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>) -> Self {
        Self { review_repo }
    }

    /// Submit a review. Every submission stores a new row; users may review
    /// the same movie more than once.
    pub async fn submit(&self, data: CreateReview) -> AppResult<Review> {
        if !(1..=5).contains(&data.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        if data.review.trim().is_empty() {
            return Err(AppError::validation("Review text is required"));
        }

        let created = self.review_repo.create(&data).await?;
        info!(
            review_id = %created.id,
            movie_id = %created.movie_id,
            rating = created.rating,
            "Review submitted"
        );
        Ok(created)
    }

    /// Reviews for a movie, newest first, annotated with usernames.
    pub async fn list(&self, movie_id: Uuid) -> AppResult<Vec<ReviewWithUsername>> {
        self.review_repo.find_by_movie(movie_id).await
    }
}
