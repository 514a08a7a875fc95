//! # cinema-payments
//!
//! Payment provider integrations for PulseCinema.
//!
//! Implements the `PaymentProvider` trait from `cinema-core` against a
//! Stripe-compatible hosted checkout API, along with webhook signature
//! verification and the session metadata codec that carries booking
//! details through the provider round trip.

pub mod hosted_checkout;
pub mod metadata;
pub mod mock;
pub mod webhook;

pub use hosted_checkout::HostedCheckoutProvider;
pub use metadata::SessionMetadata;
pub use mock::MockPaymentProvider;
pub use webhook::{ProviderEvent, WebhookVerifier, SIGNATURE_HEADER};
