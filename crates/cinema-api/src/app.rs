//! Server assembly and lifecycle.
//!
//! `run_server` owns the wiring order: storage, repositories, payment
//! integration, services, then the router. Tests that want an in-process
//! app without a listener go through `build_app` with a hand-built state.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use cinema_core::config::AppConfig;
use cinema_core::config::payment::PaymentConfig;
use cinema_core::error::AppError;
use cinema_core::traits::payment::PaymentProvider;
use cinema_database::repositories::{
    BookingRepository, CouponRepository, HallBookingRepository, MovieRepository, ReviewRepository,
    ShowtimeRepository, UserRepository,
};
use cinema_payments::{HostedCheckoutProvider, MockPaymentProvider, WebhookVerifier};
use cinema_service::{
    AdminReportService, CheckoutService, CouponService, HallBookingService, MovieService,
    ReviewService, SeatService, SettlementService, ShowtimeService,
};
use cinema_storage::PosterStore;

use crate::router::build_router;
use crate::state::AppState;

/// Turn an assembled [`AppState`] into a serveable Axum app.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Wire every layer together and serve until a shutdown signal arrives.
///
/// Expects a migrated database pool; the binary runs migrations before
/// calling this.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let config = Arc::new(config);

    // ── Step 1: Initialize poster storage ────────────────────────
    let poster_store = Arc::new(PosterStore::new(&config.storage).await?);

    // ── Step 2: Initialize repositories ──────────────────────────
    let movie_repo = Arc::new(MovieRepository::new(db_pool.clone()));
    let showtime_repo = Arc::new(ShowtimeRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
    let hall_repo = Arc::new(HallBookingRepository::new(db_pool.clone()));
    let coupon_repo = Arc::new(CouponRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool));

    // ── Step 3: Initialize payment integration ───────────────────
    tracing::info!(provider = %config.payment.provider, "Initializing payment integration");
    let provider = build_payment_provider(&config.payment)?;
    let verifier = WebhookVerifier::new(&config.payment);

    // ── Step 4: Initialize services ──────────────────────────────
    let coupon_service = Arc::new(CouponService::new(&config.coupons, Arc::clone(&coupon_repo))?);
    let movie_service = Arc::new(MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&poster_store),
    ));
    let showtime_service = Arc::new(ShowtimeService::new(
        Arc::clone(&showtime_repo),
        Arc::clone(&movie_repo),
    ));
    let seat_service = Arc::new(SeatService::new(Arc::clone(&booking_repo)));
    let hall_service = Arc::new(HallBookingService::new(Arc::clone(&hall_repo)));
    let checkout_service = Arc::new(CheckoutService::new(
        provider,
        Arc::clone(&movie_repo),
        Arc::clone(&coupon_service),
        config.payment.clone(),
    ));
    let settlement_service = Arc::new(SettlementService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&coupon_service),
        verifier,
    ));
    let review_service = Arc::new(ReviewService::new(Arc::clone(&review_repo)));
    let report_service = Arc::new(AdminReportService::new(
        Arc::clone(&user_repo),
        Arc::clone(&movie_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&coupon_repo),
        Arc::clone(&hall_repo),
    ));

    // ── Step 5: Assemble application state ───────────────────────
    let app_state = AppState {
        config: Arc::clone(&config),
        poster_store,
        movie_service,
        showtime_service,
        seat_service,
        hall_service,
        coupon_service,
        checkout_service,
        settlement_service,
        review_service,
        report_service,
    };

    let app = build_app(app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Cannot listen on {}: {}", addr, e)))?;

    tracing::info!(%addr, "PulseCinema API ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server terminated abnormally: {}", e)))?;

    Ok(())
}

/// Select the payment provider implementation named by configuration.
fn build_payment_provider(config: &PaymentConfig) -> Result<Arc<dyn PaymentProvider>, AppError> {
    match config.provider.as_str() {
        "hosted_checkout" => Ok(Arc::new(HostedCheckoutProvider::new(config))),
        "mock" => Ok(Arc::new(MockPaymentProvider::default())),
        other => Err(AppError::configuration(format!(
            "Unknown payment provider '{}'",
            other
        ))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
