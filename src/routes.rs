use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Movie, MovieChanges, NewMovie},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(update_movie).delete(delete_movie))
        .route("/movies/title/{title}", get(get_movie_by_title))
        .route("/movies/country/{country}", get(list_movies_by_country))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any)),
        )
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    match state.movies.ping().await {
        Ok(()) => Json(json!({ "status": "ok" })).into_response(),
        Err(err) => {
            warn!(error = %err, "datastore ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "unavailable" })))
                .into_response()
        },
    }
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.movies.list_all().await?))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    state.movies.find_by_id(id).await?.map(Json).ok_or_else(|| AppError::movie_not_found(id))
}

pub async fn get_movie_by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Json<Movie>> {
    state
        .movies
        .find_by_title(&title)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::movie_not_found(title))
}

/// Never 404s: no match is an empty list.
pub async fn list_movies_by_country(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.movies.find_by_country(&country).await?))
}

/// Persists, then confirms the row exists before answering 201.
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewMovie>,
) -> AppResult<Response> {
    let mut movie = Movie::from(body);
    state.movies.persist(&mut movie).await?;

    if !state.movies.is_persistent(&movie).await? {
        return Err(AppError::NotPersisted);
    }
    let location = movie.location().ok_or(AppError::NotPersisted)?;

    debug!(location = %location, "created movie");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(movie)).into_response())
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(changes): Json<MovieChanges>,
) -> AppResult<Json<Movie>> {
    let mut movie =
        state.movies.find_by_id(id).await?.ok_or_else(|| AppError::movie_not_found(id))?;
    movie.apply(changes);

    // The row can disappear between the lookup and the write.
    state.movies.update(&movie).await?.map(Json).ok_or_else(|| AppError::movie_not_found(id))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.movies.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::movie_not_found(id))
    }
}
