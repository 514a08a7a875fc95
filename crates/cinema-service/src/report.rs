//! Admin dashboard reporting.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cinema_core::AppResult;
use cinema_database::repositories::{
    BookingRepository, CouponRepository, HallBookingRepository, MovieRepository, UserRepository,
};

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSummary {
    /// Total registered users.
    pub total_users: i64,
    /// Total movies in the catalog.
    pub total_movies: i64,
    /// Number of paid bookings.
    pub paid_bookings: i64,
    /// Sum of paid booking totals in whole currency units.
    pub total_revenue: Decimal,
    /// Outstanding active coupons.
    pub active_coupons: i64,
    /// Total hall reservations.
    pub hall_bookings: i64,
}

/// Produces admin dashboard aggregates.
#[derive(Debug, Clone)]
pub struct AdminReportService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Movie repository.
    movie_repo: Arc<MovieRepository>,
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Coupon repository.
    coupon_repo: Arc<CouponRepository>,
    /// Hall booking repository.
    hall_repo: Arc<HallBookingRepository>,
}

impl AdminReportService {
    /// Creates a new admin report service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        movie_repo: Arc<MovieRepository>,
        booking_repo: Arc<BookingRepository>,
        coupon_repo: Arc<CouponRepository>,
        hall_repo: Arc<HallBookingRepository>,
    ) -> Self {
        Self {
            user_repo,
            movie_repo,
            booking_repo,
            coupon_repo,
            hall_repo,
        }
    }

    /// Total registered users.
    pub async fn total_users(&self) -> AppResult<i64> {
        self.user_repo.count().await
    }

    /// Full dashboard summary.
    pub async fn summary(&self) -> AppResult<AdminSummary> {
        let total_users = self.user_repo.count().await?;
        let total_movies = self.movie_repo.count().await?;
        let paid_bookings = self.booking_repo.count_paid().await?;
        let total_revenue = self.booking_repo.total_revenue().await?;
        let active_coupons = self.coupon_repo.count_active().await?;
        let hall_bookings = self.hall_repo.count().await?;

        Ok(AdminSummary {
            total_users,
            total_movies,
            paid_bookings,
            total_revenue,
            active_coupons,
            hall_bookings,
        })
    }
}
