//! Movie catalog and showtime services.

pub mod movie;
pub mod showtime;

pub use movie::MovieService;
pub use showtime::ShowtimeService;
