//! The video record and the rules applied to incoming video payloads.
//!
//! [`Video`] is what the catalog stores and returns. [`VideoInput`] is the
//! loosely-typed create/update payload as it arrives over the wire, and
//! [`VideoDraft`] is the same payload after [`VideoInput::validate`] has
//! checked it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Timestamp, VideoId};

/// Fields that must be present and non-empty on every create and update.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "description", "filename"];

/// A cataloged video.
///
/// `filename` and `thumbnail` are relative references to files served by
/// the static media layer; nothing checks that they exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub filename: String,
    pub thumbnail: Option<String>,
    /// Length in seconds. No write path sets this yet.
    pub duration: Option<i64>,
    pub uploaded_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create/update payload as received from a client.
///
/// Every field is optional here so that a missing field and an empty one
/// are both reported by [`VideoInput::validate`] rather than by the JSON
/// decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A validated payload, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub filename: String,
    pub thumbnail: Option<String>,
}

impl VideoInput {
    /// Convenience constructor for the three required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            filename: Some(filename.into()),
            thumbnail: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Check the required fields and turn the payload into a [`VideoDraft`].
    ///
    /// The error lists every missing field. An empty `thumbnail` is treated
    /// as no thumbnail.
    pub fn validate(self) -> Result<VideoDraft, CoreError> {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .zip([&self.title, &self.description, &self.filename])
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "Title, description, and filename are required (missing: {})",
                missing.join(", ")
            )));
        }

        Ok(VideoDraft {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            filename: self.filename.unwrap_or_default(),
            thumbnail: self.thumbnail.filter(|t| !t.is_empty()),
        })
    }
}

/// Validate the `q` parameter of a title search.
pub fn validate_search_query(query: Option<&str>) -> Result<&str, CoreError> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(CoreError::Validation(
            "Query parameter is required".to_string(),
        )),
    }
}
