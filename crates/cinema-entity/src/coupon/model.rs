//! Coupon entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::CouponStatus;

/// A single-use discount coupon.
///
/// The plaintext code is never stored. `code_hash` is a deterministic keyed
/// hash of the uppercased plaintext used for indexed lookup; `code_encrypted`
/// holds the AES-GCM ciphertext of the plaintext for audit recovery.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Coupon {
    /// Unique coupon identifier.
    pub id: Uuid,
    /// Keyed lookup hash of the uppercased plaintext code (hex, unique).
    pub code_hash: String,
    /// Encrypted plaintext code, base64(nonce || ciphertext).
    pub code_encrypted: String,
    /// Lifecycle status.
    pub status: CouponStatus,
    /// When the coupon was created.
    pub created_at: DateTime<Utc>,
    /// When the coupon was redeemed, if it has been.
    pub redeemed_at: Option<DateTime<Utc>>,
}
