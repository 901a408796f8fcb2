//! git_commit_message - Commit Message Suggestions from a Local Model
//!
//! This library turns the current git diff into a one-line conventional
//! commit message by asking a locally hosted Ollama server.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration loading
//! - [`git`] - Diff collection
//! - [`prompt`] - Prompt template
//! - [`inference`] - Request/response types and the transport trait
//! - [`ollama`] - HTTP transport for Ollama's `/api/generate`
//! - [`normalize`] - Reduction of model output to one line
//! - [`pipeline`] - The end-to-end run
//! - [`output`] - Plain and JSON rendering
//!
//! # Example
//!
//! ```no_run
//! use git_commit_message::{config, git::GitDiff, ollama::OllamaClient, pipeline};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let outcome = pipeline::run(
//!     config::load,
//!     &GitDiff::new(),
//!     |config| OllamaClient::new(&config.ollama_url),
//!     &mut std::io::stdout(),
//! )
//! .await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod git;
pub mod inference;
pub mod normalize;
pub mod ollama;
pub mod output;
pub mod pipeline;
pub mod prompt;
