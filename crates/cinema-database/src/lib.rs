//! # cinema-database
//!
//! Pool construction, embedded migrations, and the sqlx repositories the
//! service layer talks to. Nothing above this crate writes SQL.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::connect;
pub use migration::run_migrations;
