//! Seat booking entities.

pub mod model;
pub mod status;

pub use model::{Booking, CreateBooking};
pub use status::PaymentStatus;
