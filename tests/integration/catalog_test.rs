//! Catalog, review, and admin report tests. Require Postgres:
//! `cargo test -- --ignored`.

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, TestResponse, multipart_body};

const POSTER: &[u8] = b"\x89PNG\r\n\x1a\nfake image bytes";

async fn upload_movie(app: &TestApp, title: &str, price: &str) -> TestResponse {
    let (content_type, body) = multipart_body(
        &[
            ("title", title),
            ("synopsis", "A test synopsis"),
            ("ticket_price", price),
        ],
        Some(("image", "poster.jpg", POSTER)),
    );

    app.raw_request(
        "POST",
        "/api/movies",
        &[("content-type", content_type.as_str())],
        body,
    )
    .await
}

#[tokio::test]
#[ignore]
async fn movie_upload_stores_poster_and_serves_it() {
    let app = TestApp::with_database().await;

    let response = upload_movie(&app, "Inception", "1200.50").await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["title"], json!("Inception"));
    assert_eq!(response.body["data"]["ticket_price"], json!("1200.50"));

    // The stored name is generated, only the extension survives.
    let image = response.body["data"]["image"]
        .as_str()
        .expect("image filename")
        .to_string();
    assert!(image.ends_with(".jpg"), "{image}");
    assert_ne!(image, "poster.jpg");

    let response = app
        .raw_request("GET", &format!("/uploads/{image}"), &[], Vec::new())
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/movies", None).await;
    let movies = response.body["data"].as_array().expect("movies array");
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["image"], json!(image));
}

#[tokio::test]
#[ignore]
async fn duplicate_movie_title_conflicts() {
    let app = TestApp::with_database().await;

    let response = upload_movie(&app, "Alien", "900").await;
    assert_eq!(response.status, StatusCode::OK);

    let response = upload_movie(&app, "Alien", "950").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("CONFLICT"));

    let response = app.request("GET", "/api/movies", None).await;
    assert_eq!(response.body["data"].as_array().expect("movies").len(), 1);
}

#[tokio::test]
#[ignore]
async fn movie_update_is_partial() {
    let app = TestApp::with_database().await;

    let response = upload_movie(&app, "Heat", "1000").await;
    let id = response.body["data"]["id"].as_str().expect("movie id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/movies/{id}"),
            Some(json!({ "ticket_price": "1500" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["title"], json!("Heat"));
    assert_eq!(
        response.body["data"]["ticket_price"]
            .as_str()
            .and_then(|p| p.parse::<Decimal>().ok()),
        Some(Decimal::from(1500))
    );

    let response = app
        .request(
            "PUT",
            &format!("/api/movies/{}", Uuid::new_v4()),
            Some(json!({ "title": "Ghost" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], json!("NOT_FOUND"));
}

#[tokio::test]
#[ignore]
async fn deleting_a_movie_removes_its_poster() {
    let app = TestApp::with_database().await;

    let response = upload_movie(&app, "Solaris", "800").await;
    let id = response.body["data"]["id"].as_str().expect("movie id").to_string();
    let image = response.body["data"]["image"]
        .as_str()
        .expect("image filename")
        .to_string();

    let response = app
        .request("DELETE", &format!("/api/movies/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .raw_request("GET", &format!("/uploads/{image}"), &[], Vec::new())
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/movies", None).await;
    assert!(response.body["data"].as_array().expect("movies").is_empty());
}

#[tokio::test]
#[ignore]
async fn showtime_scheduling_flow() {
    let app = TestApp::with_database().await;
    let movie_id = app.create_test_movie("Akira", "1000.00").await;

    let response = app
        .request(
            "POST",
            "/api/showtimes",
            Some(json!({
                "movie_id": movie_id,
                "show_date": "2025-08-01",
                "times": ["10 AM", "7 PM"],
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["movie_title"], json!("Akira"));
    let showtime_id = response.body["data"]["id"]
        .as_str()
        .expect("showtime id")
        .to_string();

    let response = app.request("GET", "/api/showtimes", None).await;
    let showtimes = response.body["data"].as_array().expect("showtimes array");
    assert_eq!(showtimes.len(), 1);
    assert_eq!(showtimes[0]["times"], json!(["10 AM", "7 PM"]));

    // Scheduling an unknown movie fails before anything is written.
    let response = app
        .request(
            "POST",
            "/api/showtimes",
            Some(json!({
                "movie_id": Uuid::new_v4(),
                "show_date": "2025-08-01",
                "times": ["10 AM"],
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/showtimes/{showtime_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/showtimes", None).await;
    assert!(response.body["data"].as_array().expect("showtimes").is_empty());
}

#[tokio::test]
#[ignore]
async fn reviews_carry_usernames_and_fall_back_to_anonymous() {
    let app = TestApp::with_database().await;
    let movie_id = app.create_test_movie("Ran", "1000.00").await;
    let user_id = app.create_test_user("kurosawa_fan").await;

    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({
                "movie_id": movie_id,
                "user_id": user_id,
                "review": "A masterpiece.",
                "rating": 5,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // Reviews keep no user foreign key, so an unknown user is accepted and
    // rendered anonymously.
    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({
                "movie_id": movie_id,
                "user_id": Uuid::new_v4(),
                "review": "Decent.",
                "rating": 3,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request("GET", &format!("/api/reviews/{movie_id}"), None)
        .await;
    let reviews = response.body["data"].as_array().expect("reviews array");
    assert_eq!(reviews.len(), 2);

    let usernames: Vec<&str> = reviews
        .iter()
        .map(|r| r["username"].as_str().unwrap_or_default())
        .collect();
    assert!(usernames.contains(&"kurosawa_fan"));
    assert!(usernames.contains(&"Anonymous"));

    // Reviews for a movie that does not exist are rejected.
    let response = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({
                "movie_id": Uuid::new_v4(),
                "user_id": user_id,
                "review": "Which movie?",
                "rating": 1,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn admin_reports_aggregate_counts() {
    let app = TestApp::with_database().await;
    app.create_test_user("admin_one").await;
    app.create_test_user("admin_two").await;
    app.create_test_movie("Brazil", "1000.00").await;
    app.request("POST", "/api/coupons/generate", None).await;

    let response = app.request("GET", "/api/admin/total-users", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_users"], json!(2));

    let response = app
        .request("GET", "/api/admin/reports/summary", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["total_users"], json!(2));
    assert_eq!(data["total_movies"], json!(1));
    assert_eq!(data["paid_bookings"], json!(0));
    assert_eq!(data["active_coupons"], json!(1));
    assert_eq!(data["hall_bookings"], json!(0));
    assert_eq!(
        data["total_revenue"]
            .as_str()
            .and_then(|r| r.parse::<Decimal>().ok()),
        Some(Decimal::ZERO)
    );
}
