//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use cinema_core::error::AppError;
use cinema_entity::review::CreateReview;

use crate::dto::request::SubmitReviewRequest;
use crate::dto::response::{ApiResponse, MessageResponse, ReviewResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/reviews
pub async fn submit_review(
    State(state): State<AppState>,
    Json(req): Json<SubmitReviewRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .review_service
        .submit(CreateReview {
            movie_id: req.movie_id,
            user_id: req.user_id,
            review: req.review,
            rating: req.rating,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Review submitted".to_string(),
    })))
}

/// GET /api/reviews/{movie_id}
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, ApiError> {
    let reviews = state.review_service.list(movie_id).await?;

    Ok(Json(ApiResponse::ok(
        reviews
            .into_iter()
            .map(|r| ReviewResponse {
                review: r.review,
                rating: r.rating,
                username: r.username.unwrap_or_else(|| "Anonymous".to_string()),
            })
            .collect(),
    )))
}
