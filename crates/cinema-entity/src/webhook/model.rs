//! Webhook event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::WebhookEventStatus;

/// Idempotency record for a processed provider webhook event.
///
/// The provider's event identifier is the primary key; inserting it inside
/// the settlement transaction makes duplicate deliveries detectable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WebhookEvent {
    /// The provider's unique event identifier.
    pub event_id: String,
    /// Outcome of processing the event.
    pub status: WebhookEventStatus,
    /// When the event was first processed.
    pub received_at: DateTime<Utc>,
}
