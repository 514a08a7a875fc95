//! Hall reservation tests. Require Postgres: `cargo test -- --ignored`.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, TestResponse};

async fn reserve(
    app: &TestApp,
    user_id: Uuid,
    date: &str,
    from: &str,
    to: &str,
) -> TestResponse {
    app.request(
        "POST",
        "/api/hall-bookings",
        Some(json!({
            "user_id": user_id,
            "booking_date": date,
            "from_time": from,
            "to_time": to,
            "special_request": "Projector please",
            "mobile": "0771234567",
        })),
    )
    .await
}

#[tokio::test]
#[ignore]
async fn hall_reservation_round_trips() {
    let app = TestApp::with_database().await;
    let user_id = app.create_test_user("gina").await;

    let response = reserve(&app, user_id, "2025-07-01", "10 AM", "1 PM").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["from_time"], json!("10 AM"));
    assert_eq!(response.body["data"]["to_time"], json!("1 PM"));
    assert_eq!(response.body["data"]["special_request"], json!("Projector please"));

    let response = app.request("GET", "/api/hall-bookings", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body["data"].as_array().expect("bookings array");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["booking_date"], json!("2025-07-01"));
}

#[tokio::test]
#[ignore]
async fn overlapping_reservation_conflicts() {
    let app = TestApp::with_database().await;
    let user_id = app.create_test_user("henry").await;

    let response = reserve(&app, user_id, "2025-07-02", "10 AM", "1 PM").await;
    assert_eq!(response.status, StatusCode::OK);

    let response = reserve(&app, user_id, "2025-07-02", "12 PM", "3 PM").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("CONFLICT"));
    let message = response.body["message"].as_str().unwrap_or_default();
    assert!(message.contains("already booked"), "{message}");

    // The same hours on another day are free.
    let response = reserve(&app, user_id, "2025-07-03", "12 PM", "3 PM").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn adjacent_reservations_coexist() {
    let app = TestApp::with_database().await;
    let user_id = app.create_test_user("iris").await;

    let response = reserve(&app, user_id, "2025-07-04", "10 AM", "1 PM").await;
    assert_eq!(response.status, StatusCode::OK);

    let response = reserve(&app, user_id, "2025-07-04", "1 PM", "3 PM").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
#[ignore]
async fn midnight_end_overlaps_like_any_other_hour() {
    let app = TestApp::with_database().await;
    let user_id = app.create_test_user("jack").await;

    let response = reserve(&app, user_id, "2025-07-05", "10 PM", "12 AM").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = reserve(&app, user_id, "2025-07-05", "11 PM", "12 AM").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn listing_orders_by_date_then_start_hour() {
    let app = TestApp::with_database().await;
    let user_id = app.create_test_user("kara").await;

    reserve(&app, user_id, "2025-07-11", "9 AM", "11 AM").await;
    reserve(&app, user_id, "2025-07-10", "5 PM", "7 PM").await;
    reserve(&app, user_id, "2025-07-10", "9 AM", "11 AM").await;

    let response = app.request("GET", "/api/hall-bookings", None).await;
    let bookings = response.body["data"].as_array().expect("bookings array");
    let order: Vec<(String, String)> = bookings
        .iter()
        .map(|b| {
            (
                b["booking_date"].as_str().unwrap_or_default().to_string(),
                b["from_time"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    assert_eq!(
        order,
        vec![
            ("2025-07-10".to_string(), "9 AM".to_string()),
            ("2025-07-10".to_string(), "5 PM".to_string()),
            ("2025-07-11".to_string(), "9 AM".to_string()),
        ]
    );
}
