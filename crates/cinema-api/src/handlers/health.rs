//! Liveness endpoint.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse};

/// GET /api/health
///
/// Static liveness probe. Reports the running crate version so deploys
/// are identifiable from the outside.
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(ApiResponse::ok(health))
}
