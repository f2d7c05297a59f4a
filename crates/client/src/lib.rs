//! Typed async client for the cinelog HTTP API.
//!
//! Mirrors the server's routes one method per endpoint and hands back the
//! same [`Video`] type the server serializes.
//!
//! ```no_run
//! # async fn demo() -> Result<(), cinelog_client::ClientError> {
//! use cinelog_client::VideoClient;
//! use cinelog_core::video::VideoInput;
//!
//! let client = VideoClient::new("http://localhost:3001/api");
//! let video = client
//!     .create_video(&VideoInput::new("Sintel", "Open movie", "sintel.mp4"))
//!     .await?;
//! assert!(client.get_video(video.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

use cinelog_core::types::VideoId;
use cinelog_core::video::{Video, VideoInput};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// Failure of a client call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(err) => err.status(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub db_healthy: Option<bool>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the `/api` surface of a cinelog server.
#[derive(Debug, Clone)]
pub struct VideoClient {
    base_url: String,
    http: reqwest::Client,
}

impl VideoClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:3001/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /videos`: all videos, newest first.
    pub async fn list_videos(&self) -> Result<Vec<Video>, ClientError> {
        let response = self.http.get(self.url("/videos")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /videos/{id}`. A 404 is reported as `Ok(None)`.
    pub async fn get_video(&self, id: VideoId) -> Result<Option<Video>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/videos/{id}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(response).await?.json().await?))
    }

    /// `GET /videos/search?q=`: videos whose title contains `query`.
    pub async fn search_videos(&self, query: &str) -> Result<Vec<Video>, ClientError> {
        let response = self
            .http
            .get(self.url("/videos/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /videos`.
    pub async fn create_video(&self, input: &VideoInput) -> Result<Video, ClientError> {
        let response = self
            .http
            .post(self.url("/videos"))
            .json(input)
            .send()
            .await?;
        let video: Video = check(response).await?.json().await?;
        tracing::debug!(video_id = %video.id, "Video created");
        Ok(video)
    }

    /// `PUT /videos/{id}`.
    pub async fn update_video(
        &self,
        id: VideoId,
        input: &VideoInput,
    ) -> Result<Video, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/videos/{id}")))
            .json(input)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /videos/{id}`.
    pub async fn delete_video(&self, id: VideoId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/videos/{id}")))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Pass through success responses; turn everything else into
/// [`ClientError::Api`] carrying the server's `error` message.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status,
        message: error_message(status, &text),
    })
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}
