//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PaymentStatus;

/// A confirmed (or pending) seat booking for one screening.
///
/// Bookings are created exclusively by the settlement workflow after the
/// payment provider confirms the charge, never directly by a client.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The user who paid for the booking.
    pub user_id: Uuid,
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time label, e.g. `"7:30 PM"`.
    pub show_time: String,
    /// Seat labels held by this booking, e.g. `["A1", "A2"]`.
    pub seats: Vec<String>,
    /// Total charged amount in whole currency units.
    pub total_amount: Decimal,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Provider's payment reference.
    pub payment_intent: Option<String>,
    /// Contact number supplied at checkout.
    pub mobile: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to persist a settled booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    /// The user who paid for the booking.
    pub user_id: Uuid,
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time label.
    pub show_time: String,
    /// Seat labels held by this booking.
    pub seats: Vec<String>,
    /// Total charged amount in whole currency units.
    pub total_amount: Decimal,
    /// Provider's payment reference.
    pub payment_intent: Option<String>,
    /// Contact number supplied at checkout.
    pub mobile: Option<String>,
    /// Checkout initiation time carried through provider metadata.
    /// Falls back to the insert time when absent.
    pub created_at: Option<DateTime<Utc>>,
}
