//! Coupon lifecycle: generation, validation, redemption.

use std::sync::Arc;

use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use cinema_core::config::coupon::CouponConfig;
use cinema_core::{AppError, AppResult};
use cinema_database::repositories::CouponRepository;
use cinema_entity::coupon::Coupon;

use super::cipher::CouponCipher;

const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Discount rule exposed to checkout: a percentage with an absolute cap.
#[derive(Debug, Clone, Copy)]
pub struct DiscountPolicy {
    percent: u32,
    max_discount: i64,
}

impl DiscountPolicy {
    pub fn new(config: &CouponConfig) -> Self {
        Self {
            percent: config.discount_percent,
            max_discount: config.max_discount,
        }
    }

    /// Discount for a pre-discount total, rounded to cents.
    pub fn apply(&self, total: Decimal) -> Decimal {
        let discount = (total * Decimal::from(self.percent) / Decimal::from(100)).round_dp(2);
        discount.min(Decimal::from(self.max_discount))
    }
}

/// Manages coupon codes end to end.
#[derive(Debug, Clone)]
pub struct CouponService {
    /// Coupon repository.
    coupon_repo: Arc<CouponRepository>,
    /// Code cipher and lookup hasher.
    cipher: CouponCipher,
    /// Length of coupon codes.
    code_length: usize,
    /// Discount rule applied at checkout.
    policy: DiscountPolicy,
}

impl CouponService {
    /// Creates a new coupon service. Fails when the configured secret is
    /// unusable.
    pub fn new(config: &CouponConfig, coupon_repo: Arc<CouponRepository>) -> AppResult<Self> {
        Ok(Self {
            coupon_repo,
            cipher: CouponCipher::new(config)?,
            code_length: config.code_length,
            policy: DiscountPolicy::new(config),
        })
    }

    /// Generate a fresh coupon code. The plaintext is returned exactly once
    /// and is not recoverable through any read endpoint.
    pub async fn generate(&self) -> AppResult<String> {
        loop {
            let code = random_code(self.code_length);
            let hash = self.cipher.lookup_hash(&code);
            if self.coupon_repo.exists_by_hash(&hash).await? {
                continue;
            }

            let encrypted = self.cipher.encrypt(&code)?;
            let coupon = self.coupon_repo.insert(&hash, &encrypted).await?;
            info!(coupon_id = %coupon.id, "Coupon generated");
            return Ok(code);
        }
    }

    /// Store a caller-chosen code, uppercased. Duplicate codes conflict.
    pub async fn add_custom(&self, code: &str) -> AppResult<String> {
        let code = code.trim().to_uppercase();
        if code.chars().count() != self.code_length {
            return Err(AppError::validation(format!(
                "Coupon code must be exactly {} characters",
                self.code_length
            )));
        }

        let hash = self.cipher.lookup_hash(&code);
        if self.coupon_repo.exists_by_hash(&hash).await? {
            return Err(AppError::conflict("Coupon code already exists"));
        }

        let encrypted = self.cipher.encrypt(&code)?;
        let coupon = self.coupon_repo.insert(&hash, &encrypted).await?;
        info!(coupon_id = %coupon.id, "Custom coupon added");
        Ok(code)
    }

    /// Whether the code matches an active coupon.
    pub async fn validate(&self, code: &str) -> AppResult<bool> {
        Ok(self.find_active(code).await?.is_some())
    }

    /// The active coupon matching the code, if any.
    pub async fn find_active(&self, code: &str) -> AppResult<Option<Coupon>> {
        let hash = self.cipher.lookup_hash(code);
        self.coupon_repo.find_active_by_hash(&hash).await
    }

    /// Redeem a code. An unknown or already-redeemed code returns `false`
    /// rather than an error.
    pub async fn redeem(&self, code: &str) -> AppResult<bool> {
        let hash = self.cipher.lookup_hash(code);
        match self.coupon_repo.redeem_by_hash(&hash).await? {
            Some(coupon) => {
                info!(coupon_id = %coupon.id, "Coupon redeemed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of outstanding active coupons.
    pub async fn count_active(&self) -> AppResult<i64> {
        self.coupon_repo.count_active().await
    }

    /// Discount for a pre-discount total under the configured policy.
    pub fn discount(&self, total: Decimal) -> Decimal {
        self.policy.apply(total)
    }
}

fn random_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_CHARS.len());
            CODE_CHARS[idx] as char
        })
        .collect()
}
