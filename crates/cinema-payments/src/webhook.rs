//! Webhook signature verification and event payloads.
//!
//! The provider signs each delivery with a `t=<unix>,v1=<hex hmac>` header.
//! The signed payload is `"{timestamp}.{raw body}"` keyed with the shared
//! webhook secret. Verification happens on the raw body bytes, before any
//! JSON parsing.

use std::collections::BTreeMap;

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use cinema_core::config::payment::PaymentConfig;
use cinema_core::error::ErrorKind;
use cinema_core::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// HTTP header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// A deserialized provider webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEvent {
    /// Provider-assigned event identifier, unique per event.
    pub id: String,
    /// Event type, e.g. `checkout.session.completed`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub object: CheckoutSessionObject,
}

/// The checkout session carried by `checkout.session.completed` events.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionObject {
    /// Session identifier.
    pub id: String,
    /// Total charged amount in minor currency units.
    pub amount_total: Option<i64>,
    /// ISO currency code.
    pub currency: Option<String>,
    /// Provider payment reference, kept on the booking for reconciliation.
    pub payment_intent: Option<String>,
    /// Metadata echoed back from session creation.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ProviderEvent {
    /// Parse a raw webhook body. Call only after signature verification.
    pub fn from_payload(payload: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(payload).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Malformed webhook payload", e)
        })
    }
}

/// Verifies webhook signature headers against raw request bodies.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    secret: String,
    tolerance_seconds: i64,
}

impl WebhookVerifier {
    pub fn new(config: &PaymentConfig) -> Self {
        Self {
            secret: config.webhook_secret.clone(),
            tolerance_seconds: config.timestamp_tolerance_seconds,
        }
    }

    /// Verify a signature header against the raw body, using the current time
    /// for the timestamp tolerance check.
    pub fn verify(&self, payload: &[u8], signature_header: &str) -> AppResult<()> {
        self.verify_at(payload, signature_header, Utc::now().timestamp())
    }

    fn verify_at(&self, payload: &[u8], signature_header: &str, now: i64) -> AppResult<()> {
        let (timestamp, candidates) = parse_signature_header(signature_header)?;

        if (now - timestamp).abs() > self.tolerance_seconds {
            return Err(AppError::authentication(
                "Webhook timestamp outside tolerance",
            ));
        }

        let mut mac = self.keyed_mac()?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);

        for candidate in &candidates {
            let Ok(expected) = hex::decode(candidate) else {
                continue;
            };
            if mac.clone().verify_slice(&expected).is_ok() {
                return Ok(());
            }
        }

        Err(AppError::authentication("Webhook signature mismatch"))
    }

    /// Produce a valid signature header for `payload` at `timestamp`.
    ///
    /// Used by tests and local tooling to forge deliveries.
    pub fn sign(&self, payload: &[u8], timestamp: i64) -> AppResult<String> {
        let mut mac = self.keyed_mac()?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);

        let signature = hex::encode(mac.finalize().into_bytes());
        Ok(format!("t={timestamp},v1={signature}"))
    }

    fn keyed_mac(&self) -> AppResult<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.as_bytes()).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Webhook secret rejected by HMAC", e)
        })
    }
}

/// Split a `t=...,v1=...` header into the timestamp and all `v1` candidates.
fn parse_signature_header(header: &str) -> AppResult<(i64, Vec<String>)> {
    let mut timestamp: Option<i64> = None;
    let mut candidates = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => timestamp = value.parse().ok(),
            "v1" => candidates.push(value.to_string()),
            _ => {}
        }
    }

    match timestamp {
        Some(timestamp) if !candidates.is_empty() => Ok((timestamp, candidates)),
        _ => Err(AppError::authentication(
            "Malformed webhook signature header",
        )),
    }
}
