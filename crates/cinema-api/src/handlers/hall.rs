//! Hall reservation handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cinema_core::error::AppError;
use cinema_service::hall::ReserveHallRequest as SvcReserveHall;

use crate::dto::request::ReserveHallRequest;
use crate::dto::response::{ApiResponse, HallBookingResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/hall-bookings
pub async fn reserve_hall(
    State(state): State<AppState>,
    Json(req): Json<ReserveHallRequest>,
) -> Result<Json<ApiResponse<HallBookingResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let booking = state
        .hall_service
        .reserve(SvcReserveHall {
            user_id: req.user_id,
            booking_date: req.booking_date,
            from_time: req.from_time,
            to_time: req.to_time,
            special_request: req.special_request,
            mobile: req.mobile,
        })
        .await?;

    Ok(Json(ApiResponse::ok(to_response(booking))))
}

/// GET /api/hall-bookings
pub async fn list_hall_bookings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HallBookingResponse>>>, ApiError> {
    let bookings = state.hall_service.list().await?;

    Ok(Json(ApiResponse::ok(
        bookings.into_iter().map(to_response).collect(),
    )))
}

fn to_response(booking: cinema_entity::hall::HallBooking) -> HallBookingResponse {
    HallBookingResponse {
        id: booking.id,
        user_id: booking.user_id,
        booking_date: booking.booking_date,
        from_time: booking.from_time,
        to_time: booking.to_time,
        special_request: booking.special_request,
        mobile: booking.mobile,
        created_at: booking.created_at,
    }
}
