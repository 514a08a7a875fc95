//! Movie entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A movie in the PulseCinema catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: Uuid,
    /// Movie title (unique across the catalog).
    pub title: String,
    /// Plot synopsis.
    pub synopsis: Option<String>,
    /// Ticket price in whole currency units.
    pub ticket_price: Decimal,
    /// Stored poster image filename.
    pub image: String,
    /// When the movie was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    /// Movie title.
    pub title: String,
    /// Plot synopsis.
    pub synopsis: Option<String>,
    /// Ticket price in whole currency units.
    pub ticket_price: Decimal,
    /// Stored poster image filename.
    pub image: String,
}

/// Partial update of a movie. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    /// New title.
    pub title: Option<String>,
    /// New synopsis.
    pub synopsis: Option<String>,
    /// New ticket price.
    pub ticket_price: Option<Decimal>,
}
