//! Dry run issue tracker.
use log::*;

use crate::tracker::{
    gh::{build_create_args, describe_command},
    traits::IssueTracker,
    types::{IssueRequest, SubmissionResult},
};

/// Logs the command each issue would be created with and reports success
/// without running anything.
#[derive(Debug, Clone)]
pub struct DryRunTracker {
    program: String,
    repo: String,
}

impl DryRunTracker {
    pub fn new(program: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }
}

impl IssueTracker for DryRunTracker {
    fn create_issue(&self, request: &IssueRequest) -> SubmissionResult {
        let args = build_create_args(&self.repo, request);
        warn!(
            "dry_run: would run: {}",
            describe_command(&self.program, &args)
        );
        SubmissionResult::created("")
    }
}
