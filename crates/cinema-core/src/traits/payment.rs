//! Payment provider trait for pluggable hosted checkout backends.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::result::AppResult;

/// Request to create a hosted checkout session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckoutSessionRequest {
    /// Charge amount in minor currency units.
    pub amount_minor: i64,
    /// ISO currency code.
    pub currency: String,
    /// Product name shown on the hosted checkout page.
    pub product_name: String,
    /// Number of units charged (a booking is a single line item).
    pub quantity: u32,
    /// Key/value metadata echoed back verbatim in webhook events.
    pub metadata: BTreeMap<String, String>,
    /// Redirect URL after successful payment.
    pub success_url: String,
    /// Redirect URL after cancellation.
    pub cancel_url: String,
}

/// A created checkout session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckoutSession {
    /// Provider-assigned session identifier.
    pub id: String,
    /// Hosted payment page URL to redirect the customer to.
    pub url: String,
}

/// Trait for hosted checkout payment backends.
///
/// The [`PaymentProvider`] trait is defined here in `cinema-core` and
/// implemented in `cinema-payments`. The provider is responsible only for
/// session creation; settlement arrives asynchronously via webhook.
#[async_trait]
pub trait PaymentProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "hosted_checkout", "mock").
    fn provider_type(&self) -> &str;

    /// Create a hosted checkout session and return its redirect URL.
    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> AppResult<CheckoutSession>;
}
