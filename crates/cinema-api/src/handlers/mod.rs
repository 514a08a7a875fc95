//! Route handlers organized by domain.

pub mod admin;
pub mod booking;
pub mod coupon;
pub mod hall;
pub mod health;
pub mod movie;
pub mod payment;
pub mod review;
pub mod showtime;
