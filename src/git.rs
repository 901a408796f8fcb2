//! Git operations for commit message generation
//!
//! This module collects the diff that gets sent to the model. The collector
//! sits behind the [`DiffSource`] trait so the pipeline can be driven by a
//! fake in tests.

use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Errors raised while collecting the diff
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("failed to execute '{command}': {reason}")]
    ExecutionFailed { command: String, reason: String },
}

/// Anything that can produce diff text
pub trait DiffSource {
    /// Produce the diff. An empty or whitespace-only result means there is
    /// nothing to describe and is not an error.
    fn run(&self) -> Result<String, DiffError>;
}

/// Diff collector backed by the `git` executable
#[derive(Debug, Clone, Default)]
pub struct GitDiff {
    staged: bool,
    workdir: Option<PathBuf>,
}

impl GitDiff {
    /// `git diff`: working tree against the index
    pub fn new() -> Self {
        Self::default()
    }

    /// `git diff --cached`: index against the last commit
    pub fn staged() -> Self {
        Self {
            staged: true,
            workdir: None,
        }
    }

    /// Run git in `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    fn args(&self) -> &'static [&'static str] {
        if self.staged {
            &["diff", "--cached"]
        } else {
            &["diff"]
        }
    }

    fn display_command(&self) -> String {
        format!("git {}", self.args().join(" "))
    }
}

impl DiffSource for GitDiff {
    /// Run git and return its stdout untouched
    ///
    /// # Errors
    ///
    /// * Git is not installed or not in PATH
    /// * Not in a git repository
    /// * Git exits with a non-zero status
    ///
    /// # Example
    ///
    /// ```no_run
    /// use git_commit_message::git::{DiffSource, GitDiff};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let diff = GitDiff::new().run()?;
    /// println!("Changes:\n{}", diff);
    /// # Ok(())
    /// # }
    /// ```
    fn run(&self) -> Result<String, DiffError> {
        let mut command = Command::new("git");
        command.args(self.args());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|error| DiffError::ExecutionFailed {
            command: self.display_command(),
            reason: error.to_string(),
        })?;

        if !output.status.success() {
            return Err(DiffError::ExecutionFailed {
                command: self.display_command(),
                reason: format!(
                    "exit code {:?}: {}",
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let diff = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = diff.len(), command = %self.display_command(), "collected diff");
        Ok(diff)
    }
}
