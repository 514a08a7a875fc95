//! Seat availability handlers.

use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use uuid::Uuid;

use cinema_core::error::AppError;

use crate::dto::request::SeatQuery;
use crate::dto::response::{ApiResponse, SeatsResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/bookings/seats?movie_id=...&date=...&time=...
pub async fn occupied_seats(
    State(state): State<AppState>,
    Query(query): Query<SeatQuery>,
) -> Result<Json<ApiResponse<SeatsResponse>>, ApiError> {
    let movie_id = query
        .movie_id
        .parse::<Uuid>()
        .map_err(|_| AppError::validation("Invalid movie_id"))?;
    let date = query
        .date
        .parse::<NaiveDate>()
        .map_err(|_| AppError::validation("Invalid date, expected YYYY-MM-DD"))?;
    let time = query.time.trim();
    if time.is_empty() {
        return Err(AppError::validation("time query parameter is required").into());
    }

    let occupied = state.seat_service.occupied(movie_id, date, time).await?;

    Ok(Json(ApiResponse::ok(SeatsResponse {
        occupied_seats: occupied,
    })))
}
