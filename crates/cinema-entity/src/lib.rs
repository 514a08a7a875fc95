//! # cinema-entity
//!
//! Plain data types for the PulseCinema domain: one module per table,
//! each holding the row struct (`sqlx::FromRow` + serde) together with
//! the create/update payloads the services accept.

pub mod booking;
pub mod coupon;
pub mod hall;
pub mod movie;
pub mod review;
pub mod showtime;
pub mod webhook;
