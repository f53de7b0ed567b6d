//! GitHub CLI issue tracker.
//!
//! Each issue is created by running
//! `gh issue create --repo <repo> --title <title> --body <body>` with one
//! `--label` flag per label and an optional `--milestone`. The child
//! process runs to completion before the next row is processed.
use log::*;
use std::{io::ErrorKind, process::Command};

use crate::tracker::{
    output::classify_output,
    traits::IssueTracker,
    types::{IssueRequest, SubmissionResult},
};

/// Issue tracker backed by the `gh` command line tool.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    repo: String,
}

impl GhCli {
    /// `program` is the executable to run, `repo` the `owner/name` target.
    pub fn new(program: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }
}

/// Arguments passed to the tool for one issue, in order.
pub fn build_create_args(repo: &str, request: &IssueRequest) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "issue".into(),
        "create".into(),
        "--repo".into(),
        repo.into(),
        "--title".into(),
        request.title.clone(),
        "--body".into(),
        request.body.clone(),
    ];

    for label in request.labels.iter() {
        args.push("--label".into());
        args.push(label.clone());
    }

    if let Some(milestone) = &request.milestone {
        args.push("--milestone".into());
        args.push(milestone.clone());
    }

    args
}

/// Human readable command line for logging.
pub fn describe_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

impl IssueTracker for GhCli {
    fn create_issue(&self, request: &IssueRequest) -> SubmissionResult {
        let args = build_create_args(&self.repo, request);

        info!("Running: {}", describe_command(&self.program, &args));

        match Command::new(&self.program).args(&args).output() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!(
                    "{} exited with {:?}; stdout: {:?}; stderr: {:?}",
                    self.program,
                    output.status.code(),
                    stdout,
                    stderr
                );
                classify_output(output.status.code(), &stdout, &stderr)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                SubmissionResult::failed(
                    None,
                    format!(
                        "'{}' command not found. Make sure GitHub CLI (gh) is installed and in your PATH.",
                        self.program
                    ),
                )
            }
            Err(err) => SubmissionResult::failed(
                None,
                format!("unexpected error occurred running command: {err}"),
            ),
        }
    }
}
