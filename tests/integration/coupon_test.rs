//! Coupon lifecycle tests. The database-backed ones require Postgres:
//! `cargo test -- --ignored`.

use std::sync::Arc;

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;

use cinema_core::config::coupon::CouponConfig;
use cinema_database::repositories::CouponRepository;
use cinema_service::CouponService;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore]
async fn generated_coupon_lifecycle() {
    let app = TestApp::with_database().await;

    let response = app.request("POST", "/api/coupons/generate", None).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let code = response.body["data"]["code"]
        .as_str()
        .expect("coupon code")
        .to_string();
    assert_eq!(code.len(), 8);

    let response = app
        .request("GET", &format!("/api/coupons/validate/{code}"), None)
        .await;
    assert_eq!(response.body["data"]["valid"], json!(true));

    let response = app
        .request("POST", "/api/coupons/redeem", Some(json!({ "code": code })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["redeemed"], json!(true));

    // Spent codes neither validate nor redeem again.
    let response = app
        .request("GET", &format!("/api/coupons/validate/{code}"), None)
        .await;
    assert_eq!(response.body["data"]["valid"], json!(false));

    let response = app
        .request("POST", "/api/coupons/redeem", Some(json!({ "code": code })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["redeemed"], json!(false));
}

#[tokio::test]
#[ignore]
async fn coupon_validation_is_case_insensitive() {
    let app = TestApp::with_database().await;

    let response = app.request("POST", "/api/coupons/generate", None).await;
    let code = response.body["data"]["code"]
        .as_str()
        .expect("coupon code")
        .to_lowercase();

    let response = app
        .request("GET", &format!("/api/coupons/validate/{code}"), None)
        .await;
    assert_eq!(response.body["data"]["valid"], json!(true));
}

#[tokio::test]
#[ignore]
async fn custom_code_is_uppercased_and_conflicts_on_reuse() {
    let app = TestApp::with_database().await;

    let response = app
        .request("POST", "/api/coupons/add", Some(json!({ "code": "summer25" })))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["code"], json!("SUMMER25"));

    let response = app
        .request("GET", "/api/coupons/validate/SUMMER25", None)
        .await;
    assert_eq!(response.body["data"]["valid"], json!(true));

    let response = app
        .request("POST", "/api/coupons/add", Some(json!({ "code": "Summer25" })))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("CONFLICT"));
}

#[tokio::test]
#[ignore]
async fn custom_code_length_is_enforced() {
    let app = TestApp::with_database().await;

    let response = app
        .request("POST", "/api/coupons/add", Some(json!({ "code": "ABC" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
    let message = response.body["message"].as_str().unwrap_or_default();
    assert!(message.contains("exactly 8 characters"), "{message}");
}

#[tokio::test]
async fn discount_follows_the_checkout_policy() {
    let config = CouponConfig {
        secret: "integration-test-secret".to_string(),
        code_length: 8,
        discount_percent: 10,
        max_discount: 1000,
    };
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://unused@localhost/unused")
        .expect("lazy pool");
    let service = CouponService::new(&config, Arc::new(CouponRepository::new(pool)))
        .expect("coupon service");

    assert_eq!(service.discount(Decimal::from(5000)), Decimal::from(500));
    assert_eq!(service.discount(Decimal::from(20000)), Decimal::from(1000));
}

#[tokio::test]
#[ignore]
async fn active_count_tracks_generation_and_redemption() {
    let app = TestApp::with_database().await;

    let response = app.request("GET", "/api/coupons", None).await;
    assert_eq!(response.body["data"]["total_coupons"], json!(0));

    let response = app.request("POST", "/api/coupons/generate", None).await;
    let code = response.body["data"]["code"]
        .as_str()
        .expect("coupon code")
        .to_string();
    app.request("POST", "/api/coupons/generate", None).await;

    let response = app.request("GET", "/api/coupons", None).await;
    assert_eq!(response.body["data"]["total_coupons"], json!(2));

    app.request("POST", "/api/coupons/redeem", Some(json!({ "code": code })))
        .await;

    let response = app.request("GET", "/api/coupons", None).await;
    assert_eq!(response.body["data"]["total_coupons"], json!(1));
}
