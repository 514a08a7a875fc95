//! Shared handler state.

use std::sync::Arc;

use cinema_core::config::AppConfig;
use cinema_service::{
    AdminReportService, CheckoutService, CouponService, HallBookingService, MovieService,
    ReviewService, SeatService, SettlementService, ShowtimeService,
};
use cinema_storage::PosterStore;

/// Everything a handler can reach: configuration, the poster store, and
/// the service layer. Cloned per request, so each field is `Arc`-wrapped.
/// Database access always goes through a service; handlers never see the
/// pool directly.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub poster_store: Arc<PosterStore>,

    // ── Services ─────────────────────────────────────────────
    pub movie_service: Arc<MovieService>,
    pub showtime_service: Arc<ShowtimeService>,
    pub seat_service: Arc<SeatService>,
    pub hall_service: Arc<HallBookingService>,
    pub coupon_service: Arc<CouponService>,
    pub checkout_service: Arc<CheckoutService>,
    pub settlement_service: Arc<SettlementService>,
    pub review_service: Arc<ReviewService>,
    pub report_service: Arc<AdminReportService>,
}
