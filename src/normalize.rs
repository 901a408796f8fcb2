//! Reduce raw model output to a single clean line

/// Quote characters models like to wrap their answer in
const QUOTES: [char; 2] = ['"', '`'];

/// Normalize a raw model reply into a one-line commit message
///
/// Trims surrounding whitespace, keeps only the first line and removes
/// quotes (`"` or `` ` ``, in any combination) wrapping the whole message.
/// Nothing else is touched. Applying it twice gives the same result as
/// applying it once.
///
/// # Example
///
/// ```
/// use git_commit_message::normalize::normalize;
///
/// assert_eq!(normalize("\"fix: bug\"\nextra"), "fix: bug");
/// assert_eq!(normalize("  plain message  "), "plain message");
/// ```
pub fn normalize(raw: &str) -> String {
    let first_line = raw.trim().split(['\n', '\r']).next().unwrap_or_default();
    let mut message = first_line.trim();

    // Nested wrappers such as "`feat: x`" are peeled until none remain.
    while let Some(inner) = strip_quotes(message) {
        message = inner.trim();
    }

    message.to_string()
}

fn strip_quotes(message: &str) -> Option<&str> {
    if message.len() < 2 {
        return None;
    }
    message.strip_prefix(QUOTES)?.strip_suffix(QUOTES)
}
