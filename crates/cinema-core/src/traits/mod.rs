//! Core traits defined in `cinema-core` and implemented by other crates.

pub mod payment;

pub use payment::{CheckoutSession, CheckoutSessionRequest, PaymentProvider};
