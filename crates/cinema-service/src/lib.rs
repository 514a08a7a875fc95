//! # cinema-service
//!
//! Business logic service layer for PulseCinema. Each service orchestrates
//! repositories, poster storage, and the payment provider to implement one
//! application-level use case.
//!
//! Services follow constructor injection. All dependencies are provided at
//! construction time via `Arc` references.

pub mod catalog;
pub mod coupon;
pub mod hall;
pub mod payment;
pub mod report;
pub mod review;
pub mod seats;

pub use catalog::{MovieService, ShowtimeService};
pub use coupon::{CouponCipher, CouponService};
pub use hall::HallBookingService;
pub use payment::{CheckoutService, SettlementService};
pub use report::AdminReportService;
pub use review::ReviewService;
pub use seats::SeatService;
