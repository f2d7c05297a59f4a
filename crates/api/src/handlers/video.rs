//! Handlers for the video catalog.
//!
//! Each handler validates its input, makes one call into
//! [`VideoService`](cinelog_db::VideoService) and maps the outcome onto a
//! status code. Bodies are bare JSON records or arrays of records.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::VideoId;
use cinelog_core::video::{validate_search_query, VideoInput};

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::state::AppState;

/// Parse a path id. A string that is not a UUID cannot name a stored video.
fn parse_video_id(raw: &str) -> Option<VideoId> {
    VideoId::parse_str(raw).ok()
}

fn not_found(raw: &str) -> AppError {
    AppError::Core(CoreError::video_not_found(raw))
}

/// GET /api/videos
///
/// All videos, newest upload first.
pub async fn list_videos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let videos = state.videos.list().await?;

    Ok(Json(videos))
}

/// GET /api/videos/search?q=TEXT
///
/// Videos whose title contains `q`, ordered by title. 400 when `q` is
/// missing or empty.
pub async fn search_videos(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let query = validate_search_query(params.q.as_deref())?;
    let videos = state.videos.search(query).await?;

    tracing::debug!(query, matches = videos.len(), "Video search");

    Ok(Json(videos))
}

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_video_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;

    let video = state
        .videos
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(&raw_id))?;

    Ok(Json(video))
}

/// POST /api/videos
///
/// Requires non-empty `title`, `description` and `filename`.
pub async fn create_video(
    State(state): State<AppState>,
    payload: Result<Json<VideoInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let draft = input.validate()?;

    let video = state.videos.create(&draft).await?;

    tracing::info!(video_id = %video.id, title = %video.title, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /api/videos/{id}
///
/// Replaces all editable fields. 404 when the video does not exist.
pub async fn update_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<VideoInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let draft = input.validate()?;
    let id = parse_video_id(&raw_id).ok_or_else(|| not_found(&raw_id))?;

    let video = state.videos.update(id, &draft).await?;

    tracing::info!(video_id = %video.id, title = %video.title, "Video updated");

    Ok(Json(video))
}

/// DELETE /api/videos/{id}
///
/// Always 204 unless the store fails; deleting an unknown id is a no-op.
pub async fn delete_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if let Some(id) = parse_video_id(&raw_id) {
        state.videos.delete(id).await?;
        tracing::info!(video_id = %id, "Video deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
