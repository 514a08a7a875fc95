//! HTTP route table.
//!
//! Every JSON endpoint hangs off `/api`; stored posters are served as
//! static files under `/uploads`. Handlers receive shared state through
//! Axum's `State` extractor.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use cinema_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Assemble the full router: domain routes, static poster serving, and
/// the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let cors = build_cors_layer(&state.config.server.cors);
    let uploads = ServeDir::new(state.poster_store.root());

    let api_routes = Router::new()
        .merge(movie_routes())
        .merge(showtime_routes())
        .merge(booking_routes())
        .merge(hall_routes())
        .merge(coupon_routes())
        .merge(payment_routes())
        .merge(review_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Movie catalog endpoints
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movie::list_movies))
        .route("/movies", post(handlers::movie::create_movie))
        .route("/movies/{id}", put(handlers::movie::update_movie))
        .route("/movies/{id}", delete(handlers::movie::delete_movie))
}

/// Showtime scheduling endpoints
fn showtime_routes() -> Router<AppState> {
    Router::new()
        .route("/showtimes", get(handlers::showtime::list_showtimes))
        .route("/showtimes", post(handlers::showtime::create_showtime))
        .route(
            "/showtimes/{id}",
            delete(handlers::showtime::delete_showtime),
        )
}

/// Seat availability endpoints
fn booking_routes() -> Router<AppState> {
    Router::new().route("/bookings/seats", get(handlers::booking::occupied_seats))
}

/// Hall reservation endpoints
fn hall_routes() -> Router<AppState> {
    Router::new()
        .route("/hall-bookings", get(handlers::hall::list_hall_bookings))
        .route("/hall-bookings", post(handlers::hall::reserve_hall))
}

/// Coupon lifecycle endpoints
fn coupon_routes() -> Router<AppState> {
    Router::new()
        .route("/coupons", get(handlers::coupon::total_coupons))
        .route("/coupons/generate", post(handlers::coupon::generate_coupon))
        .route("/coupons/add", post(handlers::coupon::add_coupon))
        .route(
            "/coupons/validate/{code}",
            get(handlers::coupon::validate_coupon),
        )
        .route("/coupons/redeem", post(handlers::coupon::redeem_coupon))
}

/// Checkout and webhook endpoints
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/payment/create-checkout-session",
            post(handlers::payment::create_checkout_session),
        )
        .route("/payment/webhook", post(handlers::payment::webhook))
}

/// Review endpoints
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(handlers::review::submit_review))
        .route("/reviews/{movie_id}", get(handlers::review::list_reviews))
}

/// Admin reporting endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/total-users", get(handlers::admin::total_users))
        .route(
            "/admin/reports/summary",
            get(handlers::admin::report_summary),
        )
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// CORS layer from the `[server.cors]` section. A literal `"*"` in the
/// origin or header lists switches that dimension to the permissive mode.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| method.parse().ok())
        .collect();

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            config
                .allowed_headers
                .iter()
                .filter_map(|header| header.parse::<HeaderName>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
