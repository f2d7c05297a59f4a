#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing video record.
    pub fn video_not_found(id: impl ToString) -> Self {
        CoreError::NotFound {
            entity: "Video",
            id: id.to_string(),
        }
    }
}
