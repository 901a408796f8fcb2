//! Inference request/response types and the transport seam
//!
//! [`infer`] turns a diff into raw model output. The network call itself
//! goes through [`InferenceTransport`], implemented for real by
//! [`crate::ollama::OllamaClient`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::prompt::build_prompt;

/// Errors raised while talking to the inference server
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("invalid ollama_url '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to encode request as JSON")]
    EncodingFailed(#[source] serde_json::Error),

    #[error("failed to send request to Ollama at {url}: {reason}")]
    TransportFailed { url: String, reason: String },

    #[error("Ollama API returned non-200 status: {status}. Response: {body}")]
    ServerError { status: u16, body: String },

    #[error("failed to decode Ollama response")]
    DecodingFailed(#[source] serde_json::Error),
}

/// Payload for `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always `false`: the reply must arrive as one JSON body
    pub stream: bool,
    pub options: GenerateOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
}

impl GenerateRequest {
    /// Build a non-streaming request for the configured model
    pub fn new(config: &Config, prompt: String) -> Self {
        Self {
            model: config.model.clone(),
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: config.temperature,
            },
        }
    }
}

/// Reply from `/api/generate`. Every other field the server sends is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// One request, one response
#[async_trait]
pub trait InferenceTransport {
    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, InferenceError>;
}

#[async_trait]
impl<T> InferenceTransport for &T
where
    T: InferenceTransport + Sync + ?Sized,
{
    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, InferenceError> {
        (**self).send(request).await
    }
}

/// Ask the model for a commit message describing `diff`
///
/// Performs exactly one round trip and returns the `response` text as
/// received, without trimming.
///
/// # Errors
///
/// * Any [`InferenceError`] raised by the transport
///
/// # Example
///
/// ```no_run
/// use git_commit_message::{config, inference::infer, ollama::OllamaClient};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> anyhow::Result<()> {
/// let config = config::load()?;
/// let client = OllamaClient::new(&config.ollama_url);
/// let raw = infer(&config, "+added line", &client).await?;
/// println!("Model said: {}", raw);
/// # Ok(())
/// # }
/// ```
pub async fn infer<T>(config: &Config, diff: &str, transport: &T) -> Result<String, InferenceError>
where
    T: InferenceTransport + ?Sized,
{
    let request = GenerateRequest::new(config, build_prompt(diff));
    debug!(model = %request.model, prompt_bytes = request.prompt.len(), "sending generate request");

    let response = transport.send(&request).await?;
    Ok(response.response)
}
