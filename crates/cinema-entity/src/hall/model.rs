//! Hall booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An exclusive whole-venue reservation for part of one day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HallBooking {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// The user holding the reservation.
    pub user_id: Uuid,
    /// Reservation date.
    pub booking_date: NaiveDate,
    /// Start hour label, e.g. `"10 AM"`.
    pub from_time: String,
    /// End hour label, e.g. `"1 PM"`.
    pub to_time: String,
    /// Free-form request attached to the reservation.
    pub special_request: String,
    /// Contact number.
    pub mobile: String,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a hall booking.
#[derive(Debug, Clone)]
pub struct CreateHallBooking {
    /// The user holding the reservation.
    pub user_id: Uuid,
    /// Reservation date.
    pub booking_date: NaiveDate,
    /// Start hour label.
    pub from_time: String,
    /// End hour label.
    pub to_time: String,
    /// Free-form request attached to the reservation.
    pub special_request: String,
    /// Contact number.
    pub mobile: String,
}
