//! Coupon lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use cinema_core::error::AppError;

use crate::dto::request::{AddCouponRequest, RedeemCouponRequest};
use crate::dto::response::{
    ApiResponse, CouponCodeResponse, RedeemCouponResponse, TotalCouponsResponse,
    ValidateCouponResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/coupons/generate
pub async fn generate_coupon(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CouponCodeResponse>>, ApiError> {
    let code = state.coupon_service.generate().await?;

    Ok(Json(ApiResponse::ok(CouponCodeResponse { code })))
}

/// POST /api/coupons/add
pub async fn add_coupon(
    State(state): State<AppState>,
    Json(req): Json<AddCouponRequest>,
) -> Result<Json<ApiResponse<CouponCodeResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let code = state.coupon_service.add_custom(&req.code).await?;

    Ok(Json(ApiResponse::ok(CouponCodeResponse { code })))
}

/// GET /api/coupons/validate/{code}
pub async fn validate_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ValidateCouponResponse>>, ApiError> {
    let valid = state.coupon_service.validate(&code).await?;

    Ok(Json(ApiResponse::ok(ValidateCouponResponse { valid })))
}

/// POST /api/coupons/redeem
pub async fn redeem_coupon(
    State(state): State<AppState>,
    Json(req): Json<RedeemCouponRequest>,
) -> Result<Json<ApiResponse<RedeemCouponResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let redeemed = state.coupon_service.redeem(&req.code).await?;

    Ok(Json(ApiResponse::ok(RedeemCouponResponse { redeemed })))
}

/// GET /api/coupons
pub async fn total_coupons(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TotalCouponsResponse>>, ApiError> {
    let total = state.coupon_service.count_active().await?;

    Ok(Json(ApiResponse::ok(TotalCouponsResponse {
        total_coupons: total,
    })))
}
