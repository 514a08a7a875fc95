//! Admin reporting handlers.

use axum::Json;
use axum::extract::State;

use cinema_service::report::AdminSummary;

use crate::dto::response::{ApiResponse, TotalUsersResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/total-users
pub async fn total_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TotalUsersResponse>>, ApiError> {
    let total = state.report_service.total_users().await?;

    Ok(Json(ApiResponse::ok(TotalUsersResponse {
        total_users: total,
    })))
}

/// GET /api/admin/reports/summary
pub async fn report_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AdminSummary>>, ApiError> {
    let summary = state.report_service.summary().await?;

    Ok(Json(ApiResponse::ok(summary)))
}
