//! CLI tool that suggests a git commit message using a local Ollama model
//!
//! The current diff is sent to the configured model and the reply is
//! printed as a single conventional-commit line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;

use git_commit_message::{
    config::{self, Config, ConfigError},
    git::GitDiff,
    ollama::OllamaClient,
    output::{write_json, write_plain},
    pipeline,
};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "git_commit_message")]
#[command(about = "Suggest a git commit message using a local Ollama model", long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    /// (defaults to ~/.config/git_commit_message/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Describe staged changes (git diff --cached) instead of the working tree
    #[arg(long)]
    staged: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point
///
/// # Process flow
///
/// 1. Parse command-line arguments and set up logging
/// 2. Load configuration file
/// 3. Get git diff
/// 4. Generate commit message with the Ollama model
/// 5. Print the message, or a notice if there was nothing to describe
///
/// Any failure is logged on stderr and the process exits with status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let diff_source = if args.staged {
        GitDiff::staged()
    } else {
        GitDiff::new()
    };
    let config_path = args.config;
    let load = move || -> Result<Config, ConfigError> {
        match config_path {
            Some(path) => config::load_from(path),
            None => config::load(),
        }
    };
    let transport_for = |config: &Config| OllamaClient::new(config.ollama_url.as_str());

    if args.json {
        let outcome = pipeline::run(load, &diff_source, transport_for, &mut io::sink()).await?;
        write_json(&mut io::stdout(), &mut io::stderr(), &outcome)
            .context("Failed to write JSON output")?;
    } else {
        let outcome = pipeline::run(load, &diff_source, transport_for, &mut io::stdout()).await?;
        write_plain(&mut io::stdout(), &outcome).context("Failed to write output")?;
    }

    Ok(())
}

/// Emit the fatal line, falling back to `stderr` when RUST_LOG filters out errors
fn report_failure<W: Write>(err: &anyhow::Error, stderr: &mut W) {
    if tracing::enabled!(Level::ERROR) {
        error!("{err:#}");
    } else {
        let _ = writeln!(stderr, "Error: {err:#}");
    }
}

/// Log to stderr so stdout only carries the result
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_failure_without_subscriber_writes_to_stderr() {
        // Arrange - no subscriber is installed, as with RUST_LOG=off
        let err = anyhow::anyhow!("could not read config file").context("Error loading configuration");
        let mut stderr = Vec::new();

        // Act
        report_failure(&err, &mut stderr);

        // Assert
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Error: Error loading configuration: could not read config file\n"
        );
    }
}
