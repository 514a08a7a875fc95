//! In-memory payment provider for development and tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use cinema_core::traits::{CheckoutSession, CheckoutSessionRequest, PaymentProvider};
use cinema_core::AppResult;

/// Payment provider that never talks to the network.
///
/// Every session is created successfully and the request is recorded, so
/// tests can assert on what the application would have sent.
#[derive(Debug, Default)]
pub struct MockPaymentProvider {
    sessions: Mutex<Vec<CheckoutSessionRequest>>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session requests recorded so far, oldest first.
    pub async fn sessions(&self) -> Vec<CheckoutSessionRequest> {
        self.sessions.lock().await.clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    fn provider_type(&self) -> &str {
        "mock"
    }

    async fn create_checkout_session(
        &self,
        request: CheckoutSessionRequest,
    ) -> AppResult<CheckoutSession> {
        let id = format!("cs_mock_{}", uuid::Uuid::new_v4().simple());
        let url = format!("https://checkout.invalid/pay/{id}");

        tracing::info!(
            session_id = %id,
            amount_minor = request.amount_minor,
            "Mock checkout session created"
        );

        self.sessions.lock().await.push(request);

        Ok(CheckoutSession { id, url })
    }
}
