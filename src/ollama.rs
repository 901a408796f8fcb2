//! Ollama HTTP transport
//!
//! Sends a single non-streaming `POST /api/generate` and decodes the reply.
//! There are no retries: a timeout or connection failure ends the run.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use crate::inference::{GenerateRequest, GenerateResponse, InferenceError, InferenceTransport};

/// Client-side bound on the whole request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const GENERATE_PATH: &str = "/api/generate";

/// [`InferenceTransport`] talking to a running Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a client for `base_url` with the default 30 second timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<base_url>/api/generate`, with one trailing slash on the base dropped
    ///
    /// # Errors
    ///
    /// * The base URL does not parse or is not `http`/`https`
    pub fn generate_url(&self) -> Result<Url, InferenceError> {
        let trimmed = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        let raw = format!("{trimmed}{GENERATE_PATH}");

        let url = Url::parse(&raw).map_err(|error| InferenceError::InvalidEndpoint {
            url: self.base_url.clone(),
            reason: error.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(InferenceError::InvalidEndpoint {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}', expected http or https"),
            }),
        }
    }

    fn transport_error(&self, error: impl std::fmt::Display) -> InferenceError {
        InferenceError::TransportFailed {
            url: self.base_url.clone(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl InferenceTransport for OllamaClient {
    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, InferenceError> {
        let url = self.generate_url()?;
        let body = serde_json::to_vec(request).map_err(InferenceError::EncodingFailed)?;

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|error| self.transport_error(error))?;

        debug!(%url, bytes = body.len(), "posting generate request");
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|error| self.transport_error(error))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|error| self.transport_error(error))?;
        debug!(status = status.as_u16(), bytes = text.len(), "received generate response");

        if status != StatusCode::OK {
            return Err(InferenceError::ServerError {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(InferenceError::DecodingFailed)
    }
}
