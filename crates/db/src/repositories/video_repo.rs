//! Repository for the `videos` table.

use cinelog_core::types::{Timestamp, VideoId};
use cinelog_core::video::{Video, VideoDraft};
use sqlx::SqlitePool;

use crate::models::video::{VideoRow, VIDEO_COLUMNS};

/// Provides data access for video records.
pub struct VideoRepo;

impl VideoRepo {
    /// List every video, newest upload first.
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos \
             ORDER BY julianday(uploaded_at) DESC, id"
        );
        let rows = sqlx::query_as::<_, VideoRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(decode_rows(rows))
    }

    /// Find a video by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: VideoId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {VIDEO_COLUMNS} FROM videos WHERE id = ?1");
        sqlx::query_as::<_, VideoRow>(&query)
            .bind(id.to_string())
            .fetch_optional(pool)
            .await?
            .map(Video::try_from)
            .transpose()
    }

    /// Videos whose title contains `needle`, ordered by title.
    ///
    /// Matching uses SQLite's `LIKE`, so it is case-insensitive for ASCII.
    /// Wildcard characters in `needle` match literally.
    pub async fn search_by_title(
        pool: &SqlitePool,
        needle: &str,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {VIDEO_COLUMNS} FROM videos \
             WHERE title LIKE ?1 ESCAPE '\\' \
             ORDER BY title, id"
        );
        let rows = sqlx::query_as::<_, VideoRow>(&query)
            .bind(contains_pattern(needle))
            .fetch_all(pool)
            .await?;
        Ok(decode_rows(rows))
    }

    /// Insert a new video row with both timestamps set to `now`.
    pub async fn insert(
        pool: &SqlitePool,
        id: VideoId,
        draft: &VideoDraft,
        now: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO videos \
                 (id, title, description, filename, thumbnail, uploaded_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        )
        .bind(id.to_string())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.filename)
        .bind(&draft.thumbnail)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Replace the editable fields of a video and bump `updated_at`.
    ///
    /// `updated_at` never moves backwards. Stored values may be RFC 3339 or
    /// SQLite's `YYYY-MM-DD HH:MM:SS`, so they are compared as instants.
    /// Returns `true` if a row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: VideoId,
        draft: &VideoDraft,
        now: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE videos SET \
                 title = ?2, \
                 description = ?3, \
                 filename = ?4, \
                 thumbnail = ?5, \
                 updated_at = CASE \
                     WHEN julianday(updated_at) > julianday(?6) THEN updated_at \
                     ELSE ?6 \
                 END \
             WHERE id = ?1",
        )
        .bind(id.to_string())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.filename)
        .bind(&draft.thumbnail)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a video by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: VideoId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?1")
            .bind(id.to_string())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map rows for a multi-row read. Rows that cannot be decoded are logged and
/// left out.
fn decode_rows(rows: Vec<VideoRow>) -> Vec<Video> {
    rows.into_iter()
        .filter_map(|row| {
            let id = row.id.clone();
            match Video::try_from(row) {
                Ok(video) => Some(video),
                Err(e) => {
                    tracing::warn!(video_id = %id, error = %e, "Skipping undecodable video row");
                    None
                }
            }
        })
        .collect()
}

/// Build a `LIKE` pattern matching titles that contain `needle` literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
