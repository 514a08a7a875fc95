//! Webhook event status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome recorded for a processed webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "webhook_event_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventStatus {
    /// The event settled a booking.
    Settled,
    /// Settlement was rejected because a seat was already sold.
    SeatConflict,
}

impl WebhookEventStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settled => "settled",
            Self::SeatConflict => "seat_conflict",
        }
    }
}

impl fmt::Display for WebhookEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
