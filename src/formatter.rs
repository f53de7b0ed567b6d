//! Turns task rows into issue requests.
//!
//! A row is either skipped, with a [`SkipReason`], or becomes an
//! [`IssueRequest`] whose body is a markdown rendering of the row's
//! description and details.
use log::*;
use std::fmt;

use crate::{record::TaskRecord, tracker::types::IssueRequest};

/// Maximum number of characters of a title shown in progress lines.
pub const TITLE_PREVIEW_LEN: usize = 50;

/// Milestone values that mean "no milestone" (compared lowercase).
const NO_MILESTONE: [&str; 3] = ["n/a", "backlog", "\"\""];

/// Row filtering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatPolicy {
    /// Skip rows whose status is "completed" (any case).
    pub skip_completed: bool,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            skip_completed: true,
        }
    }
}

/// Why a row was not turned into an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTitle,
    StatusCompleted,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingTitle => write!(f, "missing title"),
            SkipReason::StatusCompleted => write!(f, "status completed"),
        }
    }
}

/// Outcome of formatting a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDisposition {
    Submit(IssueRequest),
    Skip(SkipReason),
}

/// Format `record` (found at `row` in the input) into an issue request.
///
/// Skip checks run in order and the first match wins: an empty title,
/// then a completed status when the policy says to skip those.
pub fn format_record(
    record: &TaskRecord,
    row: usize,
    policy: &FormatPolicy,
) -> RowDisposition {
    let title = record.title.trim();

    if title.is_empty() {
        debug!("row {row}: no title");
        return RowDisposition::Skip(SkipReason::MissingTitle);
    }

    if policy.skip_completed
        && record.status.trim().eq_ignore_ascii_case("completed")
    {
        debug!("row {row}: status is completed");
        return RowDisposition::Skip(SkipReason::StatusCompleted);
    }

    RowDisposition::Submit(IssueRequest {
        title: title.to_string(),
        body: build_body(record),
        labels: parse_labels(&record.labels),
        milestone: parse_milestone(&record.milestone),
    })
}

/// Remove one pair of surrounding double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Split comma separated label text into trimmed, non-empty labels.
pub fn parse_labels(raw: &str) -> Vec<String> {
    strip_quotes(raw.trim())
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

/// Milestone to assign, or `None` for blank and placeholder values.
pub fn parse_milestone(raw: &str) -> Option<String> {
    let cleaned = strip_quotes(raw.trim()).trim();

    if cleaned.is_empty() || NO_MILESTONE.contains(&cleaned.to_lowercase().as_str()) {
        return None;
    }

    Some(cleaned.to_string())
}

/// Render the markdown issue body for a row.
pub fn build_body(record: &TaskRecord) -> String {
    let mut lines: Vec<String> = vec![
        record.description.clone(),
        String::new(),
        "---".into(),
        "**Details:**".into(),
    ];

    let details = [
        ("Epic", &record.epic),
        ("Priority", &record.priority),
        ("Status (at creation)", &record.status),
        ("Impact", &record.impact),
        ("Effort", &record.effort),
    ];

    for (label, value) in details {
        let value = value.trim();
        if !value.is_empty() {
            lines.push(format!("- **{label}:** {value}"));
        }
    }

    if !record.notes.trim().is_empty() {
        lines.push(String::new());
        lines.push("**Notes:**".into());
        lines.push(record.notes.clone());
    }

    lines.join("\n")
}

/// First `max` characters of `title`.
pub fn truncate_title(title: &str, max: usize) -> String {
    title.chars().take(max).collect()
}
