//! # cinema-storage
//!
//! Local filesystem storage for uploaded movie posters. Posters are written
//! under a configured root with generated filenames and served back over a
//! static file route.

pub mod poster;

pub use poster::PosterStore;
