//! Booking repository implementation.
//!
//! Settlement is the only write path for bookings. It runs as a single
//! transaction covering the webhook idempotency record, the booking row,
//! its per-seat uniqueness rows, and the attached coupon flip.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use cinema_core::error::{AppError, ErrorKind};
use cinema_core::result::AppResult;
use cinema_entity::booking::{Booking, CreateBooking, PaymentStatus};
use cinema_entity::webhook::{WebhookEvent, WebhookEventStatus};

/// Outcome of a settlement attempt.
#[derive(Debug, Clone)]
pub enum SettleOutcome {
    /// The booking was persisted.
    Created(Booking),
    /// The event id was seen before; nothing was written.
    AlreadyProcessed,
    /// A requested seat is already sold for this show. The event is
    /// recorded so the provider stops retrying; no booking was written.
    SeatConflict,
}

/// Repository for seat bookings and webhook settlement.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinct sorted seat labels held by paid bookings for one show.
    pub async fn occupied_seats(
        &self,
        movie_id: Uuid,
        show_date: NaiveDate,
        show_time: &str,
    ) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT bs.seat FROM booking_seats bs \
             JOIN bookings b ON b.id = bs.booking_id \
             WHERE bs.movie_id = $1 AND bs.show_date = $2 AND bs.show_time = $3 \
               AND b.payment_status = $4 \
             ORDER BY bs.seat",
        )
        .bind(movie_id)
        .bind(show_date)
        .bind(show_time)
        .bind(PaymentStatus::Paid)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch booked seats", e))
    }

    /// Look up a previously processed webhook event.
    pub async fn find_webhook_event(&self, event_id: &str) -> AppResult<Option<WebhookEvent>> {
        sqlx::query_as::<_, WebhookEvent>("SELECT * FROM webhook_events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find webhook event", e)
            })
    }

    /// Persist a settled booking in one transaction.
    ///
    /// Inserts the idempotency record for `event_id`, the booking row, one
    /// `booking_seats` row per seat, and flips the attached coupon to
    /// redeemed. A duplicate event id returns
    /// [`SettleOutcome::AlreadyProcessed`] without writing anything. A seat
    /// uniqueness violation rolls the transaction back, records the event
    /// as a seat conflict, and returns [`SettleOutcome::SeatConflict`].
    pub async fn settle(
        &self,
        event_id: &str,
        data: &CreateBooking,
        coupon_id: Option<Uuid>,
    ) -> AppResult<SettleOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin settlement", e)
        })?;

        let inserted = sqlx::query(
            "INSERT INTO webhook_events (event_id, status) VALUES ($1, $2) \
             ON CONFLICT (event_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(WebhookEventStatus::Settled)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record webhook event", e)
        })?;

        if inserted.rows_affected() == 0 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back settlement", e)
            })?;
            return Ok(SettleOutcome::AlreadyProcessed);
        }

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
               (id, user_id, movie_id, show_date, show_time, seats, total_amount, \
                payment_status, payment_intent, mobile, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, NOW())) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.movie_id)
        .bind(data.show_date)
        .bind(&data.show_time)
        .bind(&data.seats)
        .bind(data.total_amount)
        .bind(PaymentStatus::Paid)
        .bind(&data.payment_intent)
        .bind(&data.mobile)
        .bind(data.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert booking", e))?;

        let seat_rows = sqlx::query(
            "INSERT INTO booking_seats (booking_id, movie_id, show_date, show_time, seat) \
             SELECT $1, $2, $3, $4, seat FROM UNNEST($5::text[]) AS seat",
        )
        .bind(booking.id)
        .bind(data.movie_id)
        .bind(data.show_date)
        .bind(&data.show_time)
        .bind(&data.seats)
        .execute(&mut *tx)
        .await;

        if let Err(e) = seat_rows {
            let conflict = matches!(
                &e,
                sqlx::Error::Database(db_err)
                    if db_err.constraint() == Some("booking_seats_show_seat_key")
            );
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back settlement", e)
            })?;
            if conflict {
                self.record_seat_conflict(event_id).await?;
                return Ok(SettleOutcome::SeatConflict);
            }
            return Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to insert booking seats",
                e,
            ));
        }

        if let Some(coupon_id) = coupon_id {
            sqlx::query(
                "UPDATE coupons SET status = 'redeemed', redeemed_at = NOW() \
                 WHERE id = $1 AND status = 'active'",
            )
            .bind(coupon_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to redeem coupon", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit settlement", e)
        })?;

        Ok(SettleOutcome::Created(booking))
    }

    /// Record an event whose settlement hit a permanent seat conflict.
    async fn record_seat_conflict(&self, event_id: &str) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO webhook_events (event_id, status) VALUES ($1, $2) \
             ON CONFLICT (event_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(WebhookEventStatus::SeatConflict)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record seat conflict", e)
        })?;
        Ok(())
    }

    /// Count paid bookings.
    pub async fn count_paid(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE payment_status = $1")
            .bind(PaymentStatus::Paid)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))
    }

    /// Sum of all paid booking totals.
    pub async fn total_revenue(&self) -> AppResult<Decimal> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0) FROM bookings WHERE payment_status = $1",
        )
        .bind(PaymentStatus::Paid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum booking totals", e))
    }
}
