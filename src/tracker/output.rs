//! Interpreting what the issue tracker CLI printed.
//!
//! `gh issue create` reports the new issue's URL as the last line of its
//! standard output and explains failures on standard error. Everything that
//! depends on that output format lives here.
use crate::tracker::types::SubmissionResult;

/// Exit code the tool uses for success.
pub const SUCCESS_CODE: i32 = 0;

/// Classify a finished tool invocation.
///
/// `exit_code` is `None` when the process was terminated by a signal,
/// which counts as a failure.
pub fn classify_output(
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> SubmissionResult {
    if exit_code == Some(SUCCESS_CODE) {
        return SubmissionResult::created(extract_issue_url(stdout));
    }

    SubmissionResult::failed(exit_code, failure_message(stdout, stderr))
}

/// Last non-empty line of `stdout`, trimmed. Empty when there is none.
pub fn extract_issue_url(stdout: &str) -> String {
    stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Standard error if it has content, otherwise standard output.
fn failure_message(stdout: &str, stderr: &str) -> String {
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    stdout.trim().to_string()
}
