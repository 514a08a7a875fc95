//! Showtime scheduling handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use cinema_core::error::AppError;
use cinema_entity::showtime::CreateShowtime;

use crate::dto::request::CreateShowtimeRequest;
use crate::dto::response::{ApiResponse, MessageResponse, ShowtimeResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/showtimes
pub async fn list_showtimes(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ShowtimeResponse>>>, ApiError> {
    let showtimes = state.showtime_service.list().await?;

    Ok(Json(ApiResponse::ok(
        showtimes
            .into_iter()
            .map(|s| ShowtimeResponse {
                id: s.id,
                movie_id: s.movie_id,
                movie_title: s.movie_title,
                show_date: s.show_date,
                times: s.times,
            })
            .collect(),
    )))
}

/// POST /api/showtimes
pub async fn create_showtime(
    State(state): State<AppState>,
    Json(req): Json<CreateShowtimeRequest>,
) -> Result<Json<ApiResponse<ShowtimeResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let showtime = state
        .showtime_service
        .create(CreateShowtime {
            movie_id: req.movie_id,
            show_date: req.show_date,
            times: req.times,
        })
        .await?;

    Ok(Json(ApiResponse::ok(ShowtimeResponse {
        id: showtime.id,
        movie_id: showtime.movie_id,
        movie_title: showtime.movie_title,
        show_date: showtime.show_date,
        times: showtime.times,
    })))
}

/// DELETE /api/showtimes/{id}
pub async fn delete_showtime(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.showtime_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Showtime deleted".to_string(),
    })))
}
