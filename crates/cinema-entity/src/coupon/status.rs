//! Coupon status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a discount coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "coupon_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    /// The coupon can still be validated and redeemed.
    Active,
    /// The coupon was consumed by a settled booking or an explicit redeem.
    Redeemed,
}

impl CouponStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Redeemed => "redeemed",
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
