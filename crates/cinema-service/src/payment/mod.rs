//! Checkout and webhook settlement services.

pub mod checkout;
pub mod settlement;

pub use checkout::CheckoutService;
pub use settlement::SettlementService;
