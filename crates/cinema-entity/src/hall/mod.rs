//! Full-hall reservation entities.

pub mod model;

pub use model::{CreateHallBooking, HallBooking};
