//! Hall booking repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::hall::{CreateHallBooking, HallBooking};

/// Repository for full-hall reservations.
#[derive(Debug, Clone)]
pub struct HallBookingRepository {
    pool: PgPool,
}

impl HallBookingRepository {
    /// Create a new hall booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All reservations on one date, in creation order.
    pub async fn find_by_date(&self, date: NaiveDate) -> AppResult<Vec<HallBooking>> {
        sqlx::query_as::<_, HallBooking>(
            "SELECT * FROM hall_bookings WHERE booking_date = $1 ORDER BY created_at",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list hall bookings by date", e)
        })
    }

    /// All reservations, ordered by date.
    pub async fn find_all(&self) -> AppResult<Vec<HallBooking>> {
        sqlx::query_as::<_, HallBooking>(
            "SELECT * FROM hall_bookings ORDER BY booking_date, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hall bookings", e))
    }

    /// Create a new reservation.
    pub async fn create(&self, data: &CreateHallBooking) -> AppResult<HallBooking> {
        sqlx::query_as::<_, HallBooking>(
            "INSERT INTO hall_bookings \
               (id, user_id, booking_date, from_time, to_time, special_request, mobile) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.booking_date)
        .bind(&data.from_time)
        .bind(&data.to_time)
        .bind(&data.special_request)
        .bind(&data.mobile)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create hall booking", e)
        })
    }

    /// Count all reservations.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM hall_bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count hall bookings", e)
            })
    }
}
