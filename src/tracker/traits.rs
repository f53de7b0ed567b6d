//! Traits related to issue trackers
use crate::tracker::types::{IssueRequest, SubmissionResult};

#[cfg_attr(test, mockall::automock)]
pub trait IssueTracker {
    /// Create one issue. Failures are reported in the returned
    /// [`SubmissionResult`], never as an error.
    fn create_issue(&self, request: &IssueRequest) -> SubmissionResult;
}
