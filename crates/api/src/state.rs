use cinelog_db::VideoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service shares one database pool.
#[derive(Clone)]
pub struct AppState {
    /// Video catalog service (owns the database pool).
    pub videos: VideoService,
}
