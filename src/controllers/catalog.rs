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

use crate::models::{Movie, Theater};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies).post(add_movie))
        .route("/movies/playing", get(list_playing_movies))
        .route("/theaters", get(list_theaters).post(add_theater))
        .route("/theaters/showing", get(theaters_showing))
        .route("/schedule", post(schedule_movie))
}

#[derive(Debug, Serialize)]
struct MovieResponse {
    id: u64,
    name: String,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        MovieResponse {
            id: movie.id,
            name: movie.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TheaterResponse {
    id: u64,
    name: String,
}

impl From<&Theater> for TheaterResponse {
    fn from(theater: &Theater) -> Self {
        TheaterResponse {
            id: theater.id,
            name: theater.name.clone(),
        }
    }
}

// GET /api/movies
async fn list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let movies: Vec<MovieResponse> = state
        .service
        .movies()
        .iter()
        .map(|movie| MovieResponse::from(movie.as_ref()))
        .collect();
    Json(movies)
}

// GET /api/movies/playing
async fn list_playing_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let movies: Vec<MovieResponse> = state
        .service
        .playing_movies()
        .iter()
        .map(|movie| MovieResponse::from(movie.as_ref()))
        .collect();
    Json(movies)
}

// GET /api/theaters
async fn list_theaters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let theaters: Vec<TheaterResponse> = state
        .service
        .theaters()
        .iter()
        .map(|theater| TheaterResponse::from(theater.as_ref()))
        .collect();
    Json(theaters)
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    name: String,
}

// POST /api/movies
async fn add_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddEntryRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "movie name must not be empty".to_string()));
    }
    let movie = state.service.add_movie(req.name.trim());
    tracing::info!("movie added: id={} name={:?}", movie.id, movie.name);
    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie.as_ref()))))
}

// POST /api/theaters
async fn add_theater(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddEntryRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "theater name must not be empty".to_string()));
    }
    let theater = state.service.add_theater(req.name.trim());
    tracing::info!("theater added: id={} name={:?}", theater.id, theater.name);
    Ok((StatusCode::CREATED, Json(TheaterResponse::from(theater.as_ref()))))
}

#[derive(Debug, Deserialize)]
struct ShowingQuery {
    movie: String,
}

// GET /api/theaters/showing?movie=Fight+Club
async fn theaters_showing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ShowingQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if state.service.find_movie(&params.movie).is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("movie '{}' not found", params.movie),
        ));
    }

    let theaters: Vec<TheaterResponse> = state
        .service
        .theaters_by_movie(&params.movie)
        .iter()
        .map(|theater| TheaterResponse::from(theater.as_ref()))
        .collect();
    Ok(Json(theaters))
}

#[derive(Debug, Deserialize)]
struct ScheduleRequest {
    movie: String,
    theater: String,
}

// POST /api/schedule
async fn schedule_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if state.service.find_movie(&req.movie).is_none() {
        return Err((StatusCode::NOT_FOUND, format!("movie '{}' not found", req.movie)));
    }
    if state.service.find_theater(&req.theater).is_none() {
        return Err((StatusCode::NOT_FOUND, format!("theater '{}' not found", req.theater)));
    }

    // Names resolved above, so a failure here is a duplicate pair.
    if !state.service.schedule_movie(&req.movie, &req.theater) {
        return Err((
            StatusCode::CONFLICT,
            format!("'{}' is already scheduled at '{}'", req.movie, req.theater),
        ));
    }

    tracing::info!("premiere scheduled: movie={:?} theater={:?}", req.movie, req.theater);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "premiere scheduled" })),
    ))
}
