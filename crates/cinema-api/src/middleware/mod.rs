//! Middleware applied to every request.

pub mod logging;
