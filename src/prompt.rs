//! Prompt construction for commit message generation
//!
//! The instruction text is fixed; only the diff varies between runs.

/// Instruction sent ahead of the diff
const INSTRUCTION: &str = "Based on the following git diff, generate a concise, single-line git \
commit message in the conventional commit format (e.g., 'feat: add user login' or 'fix: resolve \
race condition'). Do not include any explanation, preamble, or markdown formatting. Just the \
commit message itself.";

/// Build the prompt by embedding the diff verbatim in a fenced block
///
/// The final prompt structure is:
/// ````text
/// {instruction}
///
/// Git Diff:
/// ```diff
/// {git_diff}
/// ```
/// ````
///
/// # Example
///
/// ```
/// use git_commit_message::prompt::build_prompt;
///
/// let prompt = build_prompt("+added line");
/// assert!(prompt.ends_with("```diff\n+added line\n```"));
/// ```
pub fn build_prompt(diff: &str) -> String {
    format!("{INSTRUCTION}\n\nGit Diff:\n```diff\n{diff}\n```")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_prompt_basic() {
        // Arrange
        let diff = "diff --git a/file.txt b/file.txt\n+new line";

        // Act
        let result = build_prompt(diff);

        // Assert
        assert_eq!(
            result,
            format!(
                "{INSTRUCTION}\n\nGit Diff:\n```diff\ndiff --git a/file.txt b/file.txt\n+new line\n```"
            )
        );
    }

    #[test]
    fn test_build_prompt_asks_for_single_line_conventional_commit() {
        // Act
        let result = build_prompt("+x");

        // Assert
        assert!(result.starts_with("Based on the following git diff"));
        assert!(result.contains("single-line"));
        assert!(result.contains("conventional commit format"));
        assert!(result.contains("Do not include any explanation, preamble, or markdown"));
    }

    #[test]
    fn test_build_prompt_keeps_diff_verbatim() {
        // Arrange - whitespace, tabs, quotes and non-ASCII must survive untouched
        let diff = "  +indented\n-\ttab \"quoted\" `tick`\n+日本語 🎉\n\n";

        // Act
        let result = build_prompt(diff);

        // Assert
        assert!(result.contains(&format!("```diff\n{diff}\n```")));
    }

    #[test]
    fn test_build_prompt_very_long_input() {
        // Arrange - large diff
        let large_diff = "diff --git a/large.txt b/large.txt\n".to_string() + &"+".repeat(10000);

        // Act
        let result = build_prompt(&large_diff);

        // Assert - should handle large inputs without truncation
        assert!(result.contains(&large_diff));
        assert!(result.len() > 10000);
    }
}
