//! Discount coupon entities.

pub mod model;
pub mod status;

pub use model::Coupon;
pub use status::CouponStatus;
