//! Showtime entities.

pub mod model;

pub use model::{CreateShowtime, Showtime, ShowtimeWithTitle};
