//! Request DTOs with validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Movie partial-update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    /// New title.
    pub title: Option<String>,
    /// New synopsis.
    pub synopsis: Option<String>,
    /// New ticket price.
    pub ticket_price: Option<Decimal>,
}

/// Showtime creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateShowtimeRequest {
    /// The movie being screened.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time labels.
    #[validate(length(min = 1, message = "At least one showtime is required"))]
    pub times: Vec<String>,
}

/// Occupied-seat query parameters. Parsed in the handler so malformed
/// values surface as validation errors rather than bare rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatQuery {
    /// Movie identifier.
    pub movie_id: String,
    /// Show date (`YYYY-MM-DD`).
    pub date: String,
    /// Show time label.
    pub time: String,
}

/// Hall reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReserveHallRequest {
    /// The user holding the reservation.
    pub user_id: Uuid,
    /// Reservation date.
    pub booking_date: NaiveDate,
    /// Start hour label, e.g. `"10 AM"`.
    #[validate(length(min = 1, message = "Start time is required"))]
    pub from_time: String,
    /// End hour label, e.g. `"1 PM"`.
    #[validate(length(min = 1, message = "End time is required"))]
    pub to_time: String,
    /// Free-form request attached to the reservation.
    pub special_request: Option<String>,
    /// Contact number.
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
}

/// Custom coupon registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCouponRequest {
    /// The coupon code to register.
    #[validate(length(min = 1, message = "Coupon code is required"))]
    pub code: String,
}

/// Coupon redemption request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RedeemCouponRequest {
    /// The coupon code to redeem.
    #[validate(length(min = 1, message = "Coupon code is required"))]
    pub code: String,
}

/// Checkout session creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCheckoutSessionRequest {
    /// The purchasing user.
    pub user_id: Uuid,
    /// The movie being booked.
    pub movie_id: Uuid,
    /// Show date.
    pub show_date: NaiveDate,
    /// Show time label.
    #[validate(length(min = 1, message = "Show time is required"))]
    pub show_time: String,
    /// Seat labels to book.
    #[validate(length(min = 1, message = "At least one seat is required"))]
    pub seats: Vec<String>,
    /// Pre-computed total after any discount, in whole currency units.
    pub net_total: Decimal,
    /// Contact number.
    pub mobile: Option<String>,
    /// Coupon code applied to the total, if any.
    pub coupon_code: Option<String>,
}

/// Review submission request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    /// The reviewed movie.
    pub movie_id: Uuid,
    /// The submitting user.
    pub user_id: Uuid,
    /// Review text.
    #[validate(length(min = 1, message = "Review text is required"))]
    pub review: String,
    /// Star rating, 1 to 5 inclusive.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
}
