//! Row struct for the `videos` table.

use cinelog_core::types::{Timestamp, VideoId};
use cinelog_core::video::Video;
use sqlx::FromRow;

/// Column list for `videos` queries.
pub const VIDEO_COLUMNS: &str = "\
    id, title, description, filename, thumbnail, duration, \
    uploaded_at, updated_at";

/// A raw row from the `videos` table, before it is checked.
#[derive(Debug, Clone, FromRow)]
pub struct VideoRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub filename: String,
    pub thumbnail: Option<String>,
    pub duration: Option<i64>,
    pub uploaded_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<VideoRow> for Video {
    type Error = sqlx::Error;

    /// Map a stored row onto a [`Video`].
    ///
    /// Fails with [`sqlx::Error::ColumnDecode`] when `id` is not a UUID.
    /// A `NULL` description can only come from rows written outside the
    /// API and is read as an empty string.
    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        let id = VideoId::parse_str(&row.id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(Video {
            id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            filename: row.filename,
            thumbnail: row.thumbnail,
            duration: row.duration,
            uploaded_at: row.uploaded_at,
            updated_at: row.updated_at,
        })
    }
}
