//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user-submitted review of a movie.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// The reviewed movie.
    pub movie_id: Uuid,
    /// The submitting user.
    pub user_id: Uuid,
    /// Review text.
    pub review: String,
    /// Star rating, 1 to 5 inclusive.
    pub rating: i32,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// A review row annotated with the submitting user's username.
///
/// `username` is `None` when the user row no longer exists; listings
/// render it as `"Anonymous"`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewWithUsername {
    /// Review text.
    pub review: String,
    /// Star rating.
    pub rating: i32,
    /// Username of the submitter, if the user still exists.
    pub username: Option<String>,
}

/// Data required to create a review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    /// The reviewed movie.
    pub movie_id: Uuid,
    /// The submitting user.
    pub user_id: Uuid,
    /// Review text.
    pub review: String,
    /// Star rating, 1 to 5 inclusive.
    pub rating: i32,
}
