//! Router-level tests for validation, error mapping, and the response
//! envelope. None of these touch the database.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_returns_ok_envelope() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seat_query_rejects_bad_movie_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/bookings/seats?movie_id=not-a-uuid&date=2025-06-01&time=7%20PM",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn seat_query_rejects_bad_date() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            &format!(
                "/api/bookings/seats?movie_id={}&date=June-1st&time=7%20PM",
                uuid::Uuid::new_v4()
            ),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn webhook_without_signature_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .raw_request(
            "POST",
            "/api/payment/webhook",
            &[("Content-Type", "application/json")],
            b"{}".to_vec(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn webhook_with_tampered_payload_is_unauthorized() {
    let app = TestApp::new().await;

    let signature = app.sign_webhook(b"{\"id\":\"evt_1\"}");
    let response = app
        .raw_request(
            "POST",
            "/api/payment/webhook",
            &[("stripe-signature", &signature)],
            b"{\"id\":\"evt_2\"}".to_vec(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn webhook_with_stale_timestamp_is_unauthorized() {
    let app = TestApp::new().await;

    let payload = b"{\"id\":\"evt_old\"}";
    let stale = chrono::Utc::now().timestamp()
        - app.config.payment.timestamp_tolerance_seconds
        - 60;
    let signature = cinema_payments::WebhookVerifier::new(&app.config.payment)
        .sign(payload, stale)
        .expect("sign");

    let response = app
        .raw_request(
            "POST",
            "/api/payment/webhook",
            &[("stripe-signature", &signature)],
            payload.to_vec(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_rejects_empty_seat_list() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/payment/create-checkout-session",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "movie_id": uuid::Uuid::new_v4(),
                "show_date": "2025-06-01",
                "show_time": "7 PM",
                "seats": [],
                "net_total": "1000",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn checkout_rejects_duplicate_seats() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/payment/create-checkout-session",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "movie_id": uuid::Uuid::new_v4(),
                "show_date": "2025-06-01",
                "show_time": "7 PM",
                "seats": ["A1", "A1"],
                "net_total": "1000",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_rejects_nonpositive_total() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/payment/create-checkout-session",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "movie_id": uuid::Uuid::new_v4(),
                "show_date": "2025-06-01",
                "show_time": "7 PM",
                "seats": ["A1"],
                "net_total": "0",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_rejects_out_of_range_rating() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({
                "movie_id": uuid::Uuid::new_v4(),
                "user_id": uuid::Uuid::new_v4(),
                "review": "Great",
                "rating": 6,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn hall_reservation_rejects_inverted_range() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/hall-bookings",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "booking_date": "2025-06-01",
                "from_time": "3 PM",
                "to_time": "1 PM",
                "mobile": "0771234567",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn hall_reservation_rejects_unknown_time_label() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/hall-bookings",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "booking_date": "2025-06-01",
                "from_time": "25 XX",
                "to_time": "1 PM",
                "mobile": "0771234567",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("Invalid time slot")
    );
}

#[tokio::test]
async fn showtime_rejects_duplicate_times() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/showtimes",
            Some(json!({
                "movie_id": uuid::Uuid::new_v4(),
                "show_date": "2025-06-01",
                "times": ["10 AM", "10 AM"],
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("Duplicate showtime")
    );
}

#[tokio::test]
async fn movie_upload_requires_an_image() {
    let app = TestApp::new().await;

    let (content_type, body) = crate::helpers::multipart_body(
        &[("title", "Inception"), ("ticket_price", "1200")],
        None,
    );

    let response = app
        .raw_request(
            "POST",
            "/api/movies",
            &[("Content-Type", &content_type)],
            body,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn movie_upload_rejects_bad_price() {
    let app = TestApp::new().await;

    let (content_type, body) = crate::helpers::multipart_body(
        &[("title", "Inception"), ("ticket_price", "a lot")],
        Some(("image", "poster.jpg", b"\xFF\xD8\xFF")),
    );

    let response = app
        .raw_request(
            "POST",
            "/api/movies",
            &[("Content-Type", &content_type)],
            body,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("ticket_price")
    );
}
