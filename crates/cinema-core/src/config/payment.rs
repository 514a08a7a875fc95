//! Payment provider configuration.

use serde::{Deserialize, Serialize};

/// Hosted checkout payment provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Which provider implementation to use: `"hosted_checkout"` or `"mock"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the provider REST API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Secret API key used as the bearer token.
    #[serde(default)]
    pub secret_key: String,
    /// Shared secret used to verify webhook signatures.
    #[serde(default)]
    pub webhook_secret: String,
    /// ISO currency code for checkout sessions.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Product name shown on the hosted checkout page.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// URL the customer is sent to after a successful payment.
    #[serde(default = "default_success_url")]
    pub success_url: String,
    /// URL the customer is sent to after cancelling.
    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,
    /// Maximum accepted age of a webhook signature timestamp in seconds.
    #[serde(default = "default_timestamp_tolerance")]
    pub timestamp_tolerance_seconds: i64,
}

fn default_provider() -> String {
    "hosted_checkout".to_string()
}

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}

fn default_currency() -> String {
    "lkr".to_string()
}

fn default_product_name() -> String {
    "Movie Ticket".to_string()
}

fn default_success_url() -> String {
    "http://localhost:3000/payment/success".to_string()
}

fn default_cancel_url() -> String {
    "http://localhost:3000/payment/cancel".to_string()
}

fn default_timestamp_tolerance() -> i64 {
    300
}
