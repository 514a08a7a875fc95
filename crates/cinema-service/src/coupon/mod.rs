//! Coupon lifecycle services.

pub mod cipher;
pub mod service;

pub use cipher::CouponCipher;
pub use service::{CouponService, DiscountPolicy};
