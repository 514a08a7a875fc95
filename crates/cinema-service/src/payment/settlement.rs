//! Webhook settlement.
//!
//! The settlement path trusts only two inputs: the provider-verified event
//! (charged amount, payment reference, event id) and the metadata this
//! application attached at checkout. Client-supplied values play no part
//! after the session is created.
//!
//! Response semantics drive provider retries: an `Err` from [`SettlementService::process`]
//! becomes a 4xx/5xx and the provider redelivers; `Ok(())` acknowledges the
//! event as fully handled, including permanent failures that a retry cannot
//! fix.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use cinema_core::AppResult;
use cinema_database::repositories::{BookingRepository, SettleOutcome};
use cinema_entity::booking::CreateBooking;
use cinema_payments::{ProviderEvent, SessionMetadata, WebhookVerifier};

use crate::coupon::CouponService;

const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

/// Turns verified provider webhooks into persisted bookings.
#[derive(Debug, Clone)]
pub struct SettlementService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Coupon service, used to resolve the redeemed coupon row.
    coupon_service: Arc<CouponService>,
    /// Webhook signature verifier.
    verifier: WebhookVerifier,
}

impl SettlementService {
    /// Creates a new settlement service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        coupon_service: Arc<CouponService>,
        verifier: WebhookVerifier,
    ) -> Self {
        Self {
            booking_repo,
            coupon_service,
            verifier,
        }
    }

    /// Verify and process one webhook delivery.
    pub async fn process(&self, payload: &[u8], signature_header: &str) -> AppResult<()> {
        self.verifier.verify(payload, signature_header)?;
        let event = ProviderEvent::from_payload(payload)?;

        if event.event_type != CHECKOUT_COMPLETED {
            debug!(event_id = %event.id, event_type = %event.event_type, "Ignoring webhook event");
            return Ok(());
        }

        let session = &event.data.object;

        // Unusable event data is permanent: the provider would redeliver the
        // same bytes, so acknowledge instead of failing.
        let metadata = match SessionMetadata::from_map(&session.metadata) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(
                    event_id = %event.id,
                    session_id = %session.id,
                    error = %err,
                    "Webhook metadata unusable; acknowledging without settling"
                );
                return Ok(());
            }
        };
        let Some(amount_total) = session.amount_total else {
            warn!(
                event_id = %event.id,
                session_id = %session.id,
                "Webhook session missing amount_total; acknowledging without settling"
            );
            return Ok(());
        };

        let coupon_id = match &metadata.coupon_code {
            Some(code) => self
                .coupon_service
                .find_active(code)
                .await?
                .map(|coupon| coupon.id),
            None => None,
        };

        let booking = CreateBooking {
            user_id: metadata.user_id,
            movie_id: metadata.movie_id,
            show_date: metadata.show_date,
            show_time: metadata.show_time.clone(),
            seats: dedup_seats(metadata.seats),
            total_amount: Decimal::from(amount_total) / Decimal::from(100),
            payment_intent: session.payment_intent.clone(),
            mobile: metadata.mobile.clone(),
            created_at: metadata.created_at,
        };

        match self.booking_repo.settle(&event.id, &booking, coupon_id).await? {
            SettleOutcome::Created(booking) => {
                info!(
                    event_id = %event.id,
                    booking_id = %booking.id,
                    amount = %booking.total_amount,
                    seats = booking.seats.len(),
                    "Booking settled"
                );
            }
            SettleOutcome::AlreadyProcessed => {
                let prior = self
                    .booking_repo
                    .find_webhook_event(&event.id)
                    .await?
                    .map(|event| event.status);
                info!(event_id = %event.id, prior_status = ?prior, "Webhook event already processed");
            }
            SettleOutcome::SeatConflict => {
                error!(
                    event_id = %event.id,
                    session_id = %session.id,
                    "Seats were sold before settlement; booking dropped, manual remediation required"
                );
            }
        }

        Ok(())
    }
}

fn dedup_seats(seats: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    seats
        .into_iter()
        .filter(|seat| seen.insert(seat.clone()))
        .collect()
}
