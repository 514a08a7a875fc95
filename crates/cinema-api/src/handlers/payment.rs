//! Checkout and webhook handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use bytes::Bytes;
use validator::Validate;

use cinema_core::error::AppError;
use cinema_payments::SIGNATURE_HEADER;
use cinema_service::payment::checkout::CheckoutRequest as SvcCheckout;

use crate::dto::request::CreateCheckoutSessionRequest;
use crate::dto::response::{ApiResponse, CheckoutSessionResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/payment/create-checkout-session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(req): Json<CreateCheckoutSessionRequest>,
) -> Result<Json<ApiResponse<CheckoutSessionResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .checkout_service
        .create_session(SvcCheckout {
            user_id: req.user_id,
            movie_id: req.movie_id,
            show_date: req.show_date,
            show_time: req.show_time,
            seats: req.seats,
            net_total: req.net_total,
            mobile: req.mobile,
            coupon_code: req.coupon_code,
        })
        .await?;

    Ok(Json(ApiResponse::ok(CheckoutSessionResponse {
        id: session.id,
        url: session.url,
    })))
}

/// POST /api/payment/webhook
///
/// Consumes the raw body so the signature is checked over the exact bytes
/// the provider sent.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing webhook signature header"))?;

    state.settlement_service.process(&body, signature).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Webhook processed".to_string(),
    })))
}
