//! End-to-end commit message generation
//!
//! Load config, collect the diff, ask the model, normalize the reply. Each
//! step runs only if the previous one succeeded.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::git::{DiffError, DiffSource};
use crate::inference::{InferenceError, InferenceTransport, infer};
use crate::normalize::normalize;

/// Notice written before the model is queried
pub const PROGRESS_NOTICE: &str = "🤖 Generating commit message from diff...";

/// Any failure that ends the run
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error loading configuration")]
    Config(#[from] ConfigError),

    #[error("Error getting git diff")]
    Diff(#[from] DiffError),

    #[error("Error generating commit message")]
    Inference(#[from] InferenceError),

    #[error("Error writing output")]
    Output(#[from] std::io::Error),
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The diff was empty; the model was not queried
    NoChanges,
    /// Normalized single-line commit message
    Message(String),
}

/// Run the whole pipeline once
///
/// # Arguments
///
/// * `load_config` - Produces the configuration; called first
/// * `diff_source` - Produces the diff; skipped if config loading fails
/// * `transport_for` - Builds the transport from the loaded config; only
///   called for a non-empty diff
/// * `progress` - Receives the progress notice before the model is queried
///
/// # Errors
///
/// * Configuration, diff or inference failures, wrapped with the step name
/// * Writing the progress notice fails
pub async fn run<L, D, C, T, W>(
    load_config: L,
    diff_source: &D,
    transport_for: C,
    progress: &mut W,
) -> Result<Outcome, Error>
where
    L: FnOnce() -> Result<Config, ConfigError>,
    D: DiffSource + ?Sized,
    C: FnOnce(&Config) -> T,
    T: InferenceTransport,
    W: Write + ?Sized,
{
    let config = load_config()?;
    info!(model = %config.model, endpoint = %config.ollama_url, "configuration loaded");

    let diff = diff_source.run()?;
    if diff.trim().is_empty() {
        info!("diff is empty, nothing to describe");
        return Ok(Outcome::NoChanges);
    }

    writeln!(progress, "{PROGRESS_NOTICE}")?;
    progress.flush()?;

    let transport = transport_for(&config);
    let raw = infer(&config, &diff, &transport).await?;
    let message = normalize(&raw);
    info!(chars = message.chars().count(), "commit message generated");

    Ok(Outcome::Message(message))
}
