//! Integration tests for the PulseCinema HTTP API.
//!
//! Tests that need a PostgreSQL instance are marked `#[ignore]`; run them
//! with `cargo test -- --ignored` against a migrated test database. The
//! rest drive the full router over a lazy pool and never touch the
//! database.

mod helpers;

mod api_test;
mod catalog_test;
mod coupon_test;
mod hall_test;
