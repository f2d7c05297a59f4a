//! The video service: typed CRUD and search over the record store.
//!
//! This is the only place that assigns video ids and timestamps. Writes
//! that return a record (`create`, `update`) take two round trips: the
//! write itself, then a read-back so the returned timestamps are exactly
//! what the store holds.

use chrono::Utc;
use cinelog_core::error::CoreError;
use cinelog_core::types::VideoId;
use cinelog_core::video::{Video, VideoDraft};

use crate::error::ServiceError;
use crate::repositories::VideoRepo;
use crate::DbPool;

/// Facade over the `videos` table.
///
/// Cheaply cloneable; clones share the same pool.
#[derive(Debug, Clone)]
pub struct VideoService {
    pool: DbPool,
}

impl VideoService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for health checks.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// All videos, newest upload first.
    pub async fn list(&self) -> Result<Vec<Video>, ServiceError> {
        Ok(VideoRepo::list_newest_first(&self.pool).await?)
    }

    /// The video with `id`, or `None` if there is no such record.
    pub async fn get_by_id(&self, id: VideoId) -> Result<Option<Video>, ServiceError> {
        Ok(VideoRepo::find_by_id(&self.pool, id).await?)
    }

    /// Videos whose title contains `query`, ordered by title.
    ///
    /// Callers reject an empty query before getting here.
    pub async fn search(&self, query: &str) -> Result<Vec<Video>, ServiceError> {
        Ok(VideoRepo::search_by_title(&self.pool, query).await?)
    }

    /// Store a new video under a fresh id and return it as stored.
    pub async fn create(&self, draft: &VideoDraft) -> Result<Video, ServiceError> {
        let id = VideoId::new_v4();
        let now = Utc::now();

        VideoRepo::insert(&self.pool, id, draft, now).await?;
        tracing::debug!(%id, "Video row inserted");

        VideoRepo::find_by_id(&self.pool, id).await?.ok_or_else(|| {
            ServiceError::Core(CoreError::Internal(format!(
                "video {id} missing immediately after insert"
            )))
        })
    }

    /// Replace the editable fields of an existing video.
    ///
    /// Fails with [`CoreError::NotFound`] if `id` does not exist, including
    /// when the record is deleted between the write and the read-back.
    pub async fn update(&self, id: VideoId, draft: &VideoDraft) -> Result<Video, ServiceError> {
        let now = Utc::now();

        if !VideoRepo::update(&self.pool, id, draft, now).await? {
            return Err(CoreError::video_not_found(id).into());
        }
        tracing::debug!(%id, "Video row updated");

        VideoRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| CoreError::video_not_found(id).into())
    }

    /// Remove a video. Deleting an absent id is not an error.
    pub async fn delete(&self, id: VideoId) -> Result<(), ServiceError> {
        let deleted = VideoRepo::delete(&self.pool, id).await?;
        tracing::debug!(%id, deleted, "Video delete executed");
        Ok(())
    }

    /// Close the pool, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
