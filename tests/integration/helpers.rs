//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use cinema_api::state::AppState;
use cinema_core::config::AppConfig;
use cinema_core::traits::payment::PaymentProvider;
use cinema_database::repositories::{
    BookingRepository, CouponRepository, HallBookingRepository, MovieRepository, ReviewRepository,
    ShowtimeRepository, UserRepository,
};
use cinema_payments::{MockPaymentProvider, WebhookVerifier};
use cinema_service::{
    AdminReportService, CheckoutService, CouponService, HallBookingService, MovieService,
    ReviewService, SeatService, SettlementService, ShowtimeService,
};
use cinema_storage::PosterStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application over a lazy pool.
    ///
    /// The pool never connects unless a handler actually queries the
    /// database, so routing and validation tests run without Postgres.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_lazy(&config.database.url)
            .expect("Failed to build lazy pool");

        Self::build(config, db_pool).await
    }

    /// Create a test application connected to the test database, with
    /// migrations applied and all tables emptied.
    pub async fn with_database() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = cinema_database::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        cinema_database::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        Self::build(config, db_pool).await
    }

    async fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let poster_store = Arc::new(
            PosterStore::new(&config.storage)
                .await
                .expect("Failed to init poster store"),
        );

        let movie_repo = Arc::new(MovieRepository::new(db_pool.clone()));
        let showtime_repo = Arc::new(ShowtimeRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
        let hall_repo = Arc::new(HallBookingRepository::new(db_pool.clone()));
        let coupon_repo = Arc::new(CouponRepository::new(db_pool.clone()));
        let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

        let provider: Arc<dyn PaymentProvider> = Arc::new(MockPaymentProvider::default());
        let verifier = WebhookVerifier::new(&config.payment);

        let coupon_service = Arc::new(
            CouponService::new(&config.coupons, Arc::clone(&coupon_repo))
                .expect("Failed to init coupon service"),
        );
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

        let app_state = AppState {
            config: Arc::new(config.clone()),
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

        let router = cinema_api::build_app(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "booking_seats",
            "bookings",
            "webhook_events",
            "reviews",
            "showtimes",
            "movies",
            "hall_bookings",
            "coupons",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Insert a movie row and return its ID
    pub async fn create_test_movie(&self, title: &str, ticket_price: &str) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO movies (id, title, synopsis, ticket_price, image, created_at)
               VALUES ($1, $2, NULL, $3::numeric, 'poster.jpg', NOW())"#,
        )
        .bind(id)
        .bind(title)
        .bind(ticket_price)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test movie");

        id
    }

    /// Insert a user row and return their ID
    pub async fn create_test_user(&self, username: &str) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, username, email, created_at)
               VALUES ($1, $2, $3, NOW())"#,
        )
        .bind(id)
        .bind(username)
        .bind(format!("{}@test.com", username))
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Sign a webhook payload the way the provider would
    pub fn sign_webhook(&self, payload: &[u8]) -> String {
        WebhookVerifier::new(&self.config.payment)
            .sign(payload, chrono::Utc::now().timestamp())
            .expect("Failed to sign payload")
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a request with arbitrary headers and a raw body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Encode a multipart/form-data body from text fields plus one file field.
///
/// Returns the content type (with boundary) and the encoded body.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> (String, Vec<u8>) {
    let boundary = "cinema-test-boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((name, filename, data)) = file {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
