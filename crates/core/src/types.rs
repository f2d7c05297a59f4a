/// Video identifiers are random UUIDs assigned by the video service.
pub type VideoId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
