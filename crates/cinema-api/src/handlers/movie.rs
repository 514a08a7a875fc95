//! Movie catalog handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use rust_decimal::Decimal;
use uuid::Uuid;

use cinema_core::error::AppError;
use cinema_entity::movie::{Movie, UpdateMovie};
use cinema_service::catalog::movie::NewMovie;

use crate::dto::request::UpdateMovieRequest;
use crate::dto::response::{ApiResponse, MessageResponse, MovieResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/movies
///
/// Multipart form with `title`, `synopsis`, `ticket_price`, and `image`
/// fields. The poster file is stored first; the movie row references the
/// stored filename.
pub async fn create_movie(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<MovieResponse>>, ApiError> {
    let mut title: Option<String> = None;
    let mut synopsis: Option<String> = None;
    let mut ticket_price: Option<Decimal> = None;
    let mut poster: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "synopsis" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                if !text.trim().is_empty() {
                    synopsis = Some(text);
                }
            }
            "ticket_price" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                ticket_price = Some(
                    text.trim()
                        .parse::<Decimal>()
                        .map_err(|_| AppError::validation("Invalid ticket_price"))?,
                );
            }
            "image" => {
                let filename = field.file_name().unwrap_or("poster").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                poster = Some((filename, data));
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::validation("Title is required"))?;
    let ticket_price =
        ticket_price.ok_or_else(|| AppError::validation("Ticket price is required"))?;
    let (poster_filename, poster_bytes) =
        poster.ok_or_else(|| AppError::validation("Poster image is required"))?;

    let movie = state
        .movie_service
        .create(NewMovie {
            title,
            synopsis,
            ticket_price,
            poster_filename,
            poster_bytes,
        })
        .await?;

    Ok(Json(ApiResponse::ok(to_response(movie))))
}

/// GET /api/movies
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MovieResponse>>>, ApiError> {
    let movies = state.movie_service.list().await?;

    Ok(Json(ApiResponse::ok(
        movies.into_iter().map(to_response).collect(),
    )))
}

/// PUT /api/movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<Json<ApiResponse<MovieResponse>>, ApiError> {
    let movie = state
        .movie_service
        .update(
            id,
            UpdateMovie {
                title: req.title,
                synopsis: req.synopsis,
                ticket_price: req.ticket_price,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(to_response(movie))))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.movie_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Movie deleted".to_string(),
    })))
}

fn to_response(movie: Movie) -> MovieResponse {
    MovieResponse {
        id: movie.id,
        title: movie.title,
        synopsis: movie.synopsis,
        ticket_price: movie.ticket_price,
        image: movie.image,
        created_at: movie.created_at,
    }
}
