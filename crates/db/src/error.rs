use cinelog_core::error::CoreError;

/// Failure of a [`VideoService`](crate::VideoService) operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A domain-level failure such as a missing record.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}
