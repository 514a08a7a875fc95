//! Coupon cipher and discount configuration.

use serde::{Deserialize, Serialize};

/// Coupon code generation, encryption, and discount settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponConfig {
    /// Secret key material for the coupon cipher and lookup hash.
    #[serde(default)]
    pub secret: String,
    /// Length of generated coupon codes.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Discount percentage applied to the ticket total.
    #[serde(default = "default_discount_percent")]
    pub discount_percent: u32,
    /// Maximum discount amount in whole currency units.
    #[serde(default = "default_max_discount")]
    pub max_discount: i64,
}

fn default_code_length() -> usize {
    8
}

fn default_discount_percent() -> u32 {
    10
}

fn default_max_discount() -> i64 {
    1000
}
