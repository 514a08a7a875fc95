//! Checkout session client for a Stripe-compatible hosted payment page.

use async_trait::async_trait;
use serde::Deserialize;

use cinema_core::config::payment::PaymentConfig;
use cinema_core::error::ErrorKind;
use cinema_core::traits::{CheckoutSession, CheckoutSessionRequest, PaymentProvider};
use cinema_core::{AppError, AppResult};

/// Client for the provider's hosted checkout API.
///
/// A session is created with a single form-encoded POST. The caller
/// redirects the customer to the returned URL; the outcome arrives later
/// on the webhook endpoint.
#[derive(Debug, Clone)]
pub struct HostedCheckoutProvider {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: String,
}

impl HostedCheckoutProvider {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            secret_key: config.secret_key.clone(),
        }
    }
}

/// Flatten a session request into the provider's bracketed form fields.
fn session_params(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
        (
            "payment_method_types[0]".to_string(),
            "card".to_string(),
        ),
        (
            "line_items[0][price_data][currency]".to_string(),
            request.currency.clone(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            request.product_name.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            request.amount_minor.to_string(),
        ),
        (
            "line_items[0][quantity]".to_string(),
            request.quantity.to_string(),
        ),
    ];

    for (key, value) in &request.metadata {
        params.push((format!("metadata[{key}]"), value.clone()));
    }

    params
}

#[async_trait]
impl PaymentProvider for HostedCheckoutProvider {
    fn provider_type(&self) -> &str {
        "hosted_checkout"
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> AppResult<CheckoutSession> {
        let params = session_params(&request);

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Checkout session request failed",
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "Checkout session rejected by provider");
            return Err(AppError::external_service(format!(
                "Payment provider returned {status}"
            )));
        }

        let session: SessionResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Invalid checkout session response",
                e,
            )
        })?;

        tracing::info!(session_id = %session.id, "Checkout session created");

        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }
}
