//! # cinema-api
//!
//! Axum HTTP surface for PulseCinema: route table, request and response
//! DTOs, error-to-status mapping, request logging, CORS, and static
//! poster serving.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
