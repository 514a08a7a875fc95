//! Showtime entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Scheduled screening times for a movie on one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Showtime {
    /// Unique showtime identifier.
    pub id: Uuid,
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time labels, e.g. `"7:30 PM"`.
    pub times: Vec<String>,
    /// When the showtime was created.
    pub created_at: DateTime<Utc>,
}

/// A showtime row annotated with its movie title.
///
/// Produced by joining `showtimes` against `movies` at query time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShowtimeWithTitle {
    /// Unique showtime identifier.
    pub id: Uuid,
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Title of the movie being screened.
    pub movie_title: String,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time labels.
    pub times: Vec<String>,
}

/// Data required to create a showtime.
#[derive(Debug, Clone)]
pub struct CreateShowtime {
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time labels.
    pub times: Vec<String>,
}
