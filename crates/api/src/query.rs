//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /videos/search`.
///
/// `q` stays optional here so a missing and an empty query are rejected
/// by the same validation rule.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
