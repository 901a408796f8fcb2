//! Rendering of the final result
//!
//! Plain mode ends with the message on its own last line so scripts can take
//! the last line of output. JSON mode prints a single object.

use serde::Serialize;
use std::io::{self, Write};

use crate::pipeline::Outcome;

/// Printed when there is nothing to describe
pub const NO_CHANGES_NOTICE: &str = "No changes found. Nothing to commit. 🤔";

/// Header printed above the suggested message
pub const MESSAGE_HEADER: &str = "✅ Suggested Commit Message:";

/// Commit message structure for JSON output
///
/// # Example
///
/// ```
/// use git_commit_message::output::CommitMessage;
///
/// let commit = CommitMessage {
///     message: "feat: add new feature".to_string(),
/// };
///
/// let json = serde_json::to_string(&commit).unwrap();
/// assert_eq!(json, r#"{"message":"feat: add new feature"}"#);
/// ```
#[derive(Debug, Serialize)]
pub struct CommitMessage {
    /// The generated commit message content
    pub message: String,
}

/// Write the outcome in human-readable form
///
/// # Errors
///
/// * Writing to `out` fails
pub fn write_plain<W: Write + ?Sized>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::NoChanges => writeln!(out, "{NO_CHANGES_NOTICE}"),
        Outcome::Message(message) => {
            writeln!(out)?;
            writeln!(out, "{MESSAGE_HEADER}")?;
            writeln!(out, "{message}")
        }
    }
}

/// Write the outcome as JSON
///
/// An empty diff produces no JSON; the notice goes to `notices` instead so
/// stdout stays machine-readable.
///
/// # Errors
///
/// * Serialization or writing fails
pub fn write_json<W, N>(out: &mut W, notices: &mut N, outcome: &Outcome) -> io::Result<()>
where
    W: Write + ?Sized,
    N: Write + ?Sized,
{
    match outcome {
        Outcome::NoChanges => writeln!(notices, "{NO_CHANGES_NOTICE}"),
        Outcome::Message(message) => {
            let commit = CommitMessage {
                message: message.clone(),
            };
            serde_json::to_writer(&mut *out, &commit)?;
            writeln!(out)
        }
    }
}
