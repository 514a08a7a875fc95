//! Checkout session creation.
//!
//! Nothing is persisted here. The booking exists only inside the provider
//! session until the settlement webhook confirms payment.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cinema_core::config::payment::PaymentConfig;
use cinema_core::traits::{CheckoutSession, CheckoutSessionRequest, PaymentProvider};
use cinema_core::{AppError, AppResult};
use cinema_database::repositories::MovieRepository;
use cinema_payments::SessionMetadata;

use crate::coupon::CouponService;

/// Request to start a checkout for a seat booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The paying user.
    pub user_id: Uuid,
    /// The movie being booked.
    pub movie_id: Uuid,
    /// Screening date.
    pub show_date: NaiveDate,
    /// Screening time label.
    pub show_time: String,
    /// Seat labels to hold.
    pub seats: Vec<String>,
    /// Net amount to charge, after any client-applied discount, in whole
    /// currency units.
    pub net_total: Decimal,
    /// Contact number.
    pub mobile: Option<String>,
    /// Coupon code applied to the total, if any.
    pub coupon_code: Option<String>,
}

/// Creates provider-hosted checkout sessions.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    /// Payment provider backend.
    provider: Arc<dyn PaymentProvider>,
    /// Movie repository, used to verify the booked movie exists.
    movie_repo: Arc<MovieRepository>,
    /// Coupon service, used to reject dead coupon codes up front.
    coupon_service: Arc<CouponService>,
    /// Provider configuration.
    config: PaymentConfig,
}

impl CheckoutService {
    /// Creates a new checkout service.
    pub fn new(
        provider: Arc<dyn PaymentProvider>,
        movie_repo: Arc<MovieRepository>,
        coupon_service: Arc<CouponService>,
        config: PaymentConfig,
    ) -> Self {
        Self {
            provider,
            movie_repo,
            coupon_service,
            config,
        }
    }

    /// Validate the request and create a hosted checkout session.
    pub async fn create_session(&self, req: CheckoutRequest) -> AppResult<CheckoutSession> {
        let seats = normalized_seats(&req.seats)?;

        if req.net_total <= Decimal::ZERO {
            return Err(AppError::validation("Total must be positive"));
        }
        let show_time = req.show_time.trim();
        if show_time.is_empty() {
            return Err(AppError::validation("Show time is required"));
        }

        if self.movie_repo.find_by_id(req.movie_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Movie {} not found",
                req.movie_id
            )));
        }

        if let Some(code) = &req.coupon_code {
            if !self.coupon_service.validate(code).await? {
                return Err(AppError::validation(
                    "Coupon code is invalid or already redeemed",
                ));
            }
        }

        let amount_minor = amount_minor(req.net_total)?;

        let metadata = SessionMetadata {
            user_id: req.user_id,
            movie_id: req.movie_id,
            show_date: req.show_date,
            show_time: show_time.to_string(),
            seats: seats.clone(),
            mobile: req.mobile.clone(),
            coupon_code: req.coupon_code.clone(),
            created_at: Some(Utc::now()),
        };

        let session = self
            .provider
            .create_checkout_session(CheckoutSessionRequest {
                amount_minor,
                currency: self.config.currency.clone(),
                product_name: self.config.product_name.clone(),
                quantity: 1,
                metadata: metadata.to_map(),
                success_url: self.config.success_url.clone(),
                cancel_url: self.config.cancel_url.clone(),
            })
            .await?;

        info!(
            session_id = %session.id,
            movie_id = %req.movie_id,
            seats = seats.len(),
            amount_minor,
            "Checkout initiated"
        );

        Ok(session)
    }
}

/// Convert a whole-unit total into provider minor units, rounding the
/// half-cent midpoint away from zero.
fn amount_minor(net_total: Decimal) -> AppResult<i64> {
    (net_total * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| AppError::validation("Total is out of range"))
}

/// Trim seat labels and reject empties, duplicates, and labels that would
/// corrupt the comma-joined metadata encoding.
fn normalized_seats(seats: &[String]) -> AppResult<Vec<String>> {
    if seats.is_empty() {
        return Err(AppError::validation("At least one seat is required"));
    }

    let mut normalized = Vec::with_capacity(seats.len());
    let mut seen = HashSet::new();
    for seat in seats {
        let seat = seat.trim();
        if seat.is_empty() {
            return Err(AppError::validation("Seat labels cannot be empty"));
        }
        if seat.contains(',') {
            return Err(AppError::validation(format!(
                "Invalid seat label: {seat}"
            )));
        }
        if !seen.insert(seat.to_string()) {
            return Err(AppError::validation(format!("Duplicate seat: {seat}")));
        }
        normalized.push(seat.to_string());
    }

    Ok(normalized)
}
