//! Repository implementations for all PulseCinema entities.

pub mod booking;
pub mod coupon;
pub mod hall;
pub mod movie;
pub mod review;
pub mod showtime;
pub mod user;

pub use booking::{BookingRepository, SettleOutcome};
pub use coupon::CouponRepository;
pub use hall::HallBookingRepository;
pub use movie::MovieRepository;
pub use review::ReviewRepository;
pub use showtime::ShowtimeRepository;
pub use user::UserRepository;
