//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Movie summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    /// Movie ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Synopsis.
    pub synopsis: Option<String>,
    /// Ticket price in whole currency units.
    pub ticket_price: Decimal,
    /// Stored poster filename, served under `/uploads/`.
    pub image: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Showtime annotated with its movie title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowtimeResponse {
    /// Showtime ID.
    pub id: Uuid,
    /// Movie ID.
    pub movie_id: Uuid,
    /// Movie title.
    pub movie_title: String,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time labels.
    pub times: Vec<String>,
}

/// Occupied seats for one show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatsResponse {
    /// Seat labels held by paid bookings.
    pub occupied_seats: Vec<String>,
}

/// Hall reservation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallBookingResponse {
    /// Reservation ID.
    pub id: Uuid,
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
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Freshly issued coupon code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCodeResponse {
    /// The plaintext coupon code. Returned exactly once.
    pub code: String,
}

/// Coupon validity check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCouponResponse {
    /// Whether the code names an active coupon.
    pub valid: bool,
}

/// Coupon redemption result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemCouponResponse {
    /// Whether an active coupon was redeemed.
    pub redeemed: bool,
}

/// Active coupon count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalCouponsResponse {
    /// Number of active coupons.
    pub total_coupons: i64,
}

/// Hosted checkout session handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Provider session identifier.
    pub id: String,
    /// Redirect URL for the hosted payment page.
    pub url: String,
}

/// One review with its submitter's username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Review text.
    pub review: String,
    /// Star rating.
    pub rating: i32,
    /// Username of the submitter, `"Anonymous"` when the user is gone.
    pub username: String,
}

/// Registered user count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalUsersResponse {
    /// Number of registered users.
    pub total_users: i64,
}
