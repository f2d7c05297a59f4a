//! Route definitions for the video catalog.
//!
//! Mounted at `/videos`. `/search` is a static segment and takes priority
//! over `/{id}`.
//!
//! ```text
//! GET    /              list_videos
//! POST   /              create_video
//! GET    /search?q=     search_videos
//! GET    /{id}          get_video
//! PUT    /{id}          update_video
//! DELETE /{id}          delete_video
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list_videos).post(video::create_video))
        .route("/search", get(video::search_videos))
        .route(
            "/{id}",
            get(video::get_video)
                .put(video::update_video)
                .delete(video::delete_video),
        )
}
