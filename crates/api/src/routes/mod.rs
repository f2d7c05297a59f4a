pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service health (GET)
///
/// /videos                 list, create (GET, POST)
/// /videos/search?q=       title search (GET)
/// /videos/{id}            get, update, delete (GET, PUT, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/videos", video::router())
}
