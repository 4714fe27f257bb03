use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/book", post(book_seats))
}

#[derive(Debug, Deserialize)]
struct SeatsQuery {
    theater: String,
    movie: String,
}

#[derive(Debug, Serialize)]
struct SeatsResponse {
    theater: String,
    movie: String,
    seats_available: Vec<u16>,
}

// GET /api/seats?theater=4DX&movie=Fight+Club
async fn get_seats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeatsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(premiere) = state
        .service
        .get_premiere_by_names(&params.theater, &params.movie)
    else {
        return Err((
            StatusCode::NOT_FOUND,
            format!("no premiere of '{}' at '{}'", params.movie, params.theater),
        ));
    };

    Ok(Json(SeatsResponse {
        theater: params.theater,
        movie: params.movie,
        seats_available: premiere.seats_available(),
    }))
}

#[derive(Debug, Deserialize)]
struct BookSeatsRequest {
    theater: String,
    movie: String,
    seats: Vec<u16>,
}

// POST /api/seats/book
async fn book_seats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookSeatsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.seats.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "no seats requested".to_string()));
    }

    let Some(premiere) = state.service.get_premiere_by_names(&req.theater, &req.movie) else {
        return Err((
            StatusCode::NOT_FOUND,
            format!("no premiere of '{}' at '{}'", req.movie, req.theater),
        ));
    };

    // All-or-nothing: a refusal leaves the seat map untouched.
    if !premiere.book_seats(&req.seats) {
        return Err((
            StatusCode::CONFLICT,
            "requested seats are out of range or no longer available".to_string(),
        ));
    }

    tracing::info!(
        "seats booked: theater={:?} movie={:?} seats={:?}",
        req.theater,
        req.movie,
        req.seats
    );
    Ok((
        StatusCode::OK,
        Json(json!({
            "message": "seats booked",
            "seats_available": premiere.seats_available(),
        })),
    ))
}
