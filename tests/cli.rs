//! End-to-end tests for the `issue-importer` binary.
//!
//! Every test runs inside its own temporary directory so no
//! `issue-importer.toml` from the developer's checkout is picked up.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::TempDir;

const HEADER: &str = "Task Title,Task Description,Status,Epic,Priority,Impact,Effort,Notes / Suggested Grouping,GitHub Labels (Suggested),Milestone";

fn importer(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("issue-importer");
    cmd.current_dir(dir);
    cmd
}

fn write_csv(dir: &Path, rows: &[&str]) -> String {
    let path = dir.join("tasks.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn no_arguments_exits_with_one() {
    let temp = TempDir::new().unwrap();

    importer(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("usage: issue-importer"));
}

#[test]
fn missing_csv_file_exits_with_one_without_summary() {
    let temp = TempDir::new().unwrap();

    importer(temp.path())
        .arg("does-not-exist.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CSV file not found"))
        .stdout(predicate::str::contains("Issue Creation Summary").not());
}

#[test]
fn invalid_repo_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(temp.path(), &["Task,,,,,,,,,"]);

    importer(temp.path())
        .args(["--repo", "not-a-repo", csv.as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("owner/name"));
}

#[test]
fn dry_run_creates_nothing_and_counts_rows() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(
        temp.path(),
        &[
            "Valid task,desc,Open,,,,,,,",
            ",no title,Open,,,,,,,",
            "Done,desc,Completed,,,,,,,",
        ],
    );

    importer(temp.path())
        .args(["--dry-run", "--tool", "no-such-gh-binary", csv.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully Created: 1"))
        .stdout(predicate::str::contains(
            "Skipped (Status or Malformed Row): 2",
        ))
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn missing_tool_is_counted_as_failure() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(temp.path(), &["Task,,,,,,,,,"]);

    importer(temp.path())
        .args(["--tool", "no-such-gh-binary", csv.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("command not found"))
        .stdout(predicate::str::contains("Failed: 1"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("issue-importer.toml"),
        "repo = \"acme/widgets\"\nskip_completed = false\n",
    )
    .unwrap();
    let csv = write_csv(temp.path(), &["Done,desc,Completed,,,,,,,"]);

    importer(temp.path())
        .args(["--dry-run", csv.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processing issues for repository: acme/widgets",
        ))
        .stdout(predicate::str::contains("Successfully Created: 1"));
}

#[test]
fn explicit_missing_config_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(temp.path(), &["Task,,,,,,,,,"]);

    importer(temp.path())
        .args(["--config", "missing.toml", csv.as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[cfg(unix)]
mod fake_tool {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    fn write_tool(dir: &Path, body: &str) -> String {
        let path = dir.join("fake-gh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn three_rows_one_created_two_skipped() {
        let temp = TempDir::new().unwrap();
        let tool = write_tool(
            temp.path(),
            "echo Created\necho https://tracker/issues/42",
        );
        let csv = write_csv(
            temp.path(),
            &[
                "Valid task,desc,Open,,,,,,,",
                ",no title,Open,,,,,,,",
                "Done,desc,Completed,,,,,,,",
            ],
        );

        importer(temp.path())
            .args(["--repo", "acme/widgets", "--tool", tool.as_str(), csv.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                " -> SUCCESS: Created Issue 'Valid task' https://tracker/issues/42",
            ))
            .stdout(predicate::str::contains("Successfully Created: 1"))
            .stdout(predicate::str::contains(
                "Skipped (Status or Malformed Row): 2",
            ))
            .stdout(predicate::str::contains("Failed: 0"));
    }

    #[test]
    fn rejected_issue_is_reported_and_run_succeeds() {
        let temp = TempDir::new().unwrap();
        let tool =
            write_tool(temp.path(), "echo 'permission denied' >&2\nexit 1");
        let csv = write_csv(temp.path(), &["Task,,,,,,,,,"]);

        importer(temp.path())
            .args(["--tool", tool.as_str(), csv.as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains(" -> Error Output: permission denied"))
            .stdout(predicate::str::contains("Successfully Created: 0"))
            .stdout(predicate::str::contains("Failed: 1"));
    }

    #[test]
    fn fail_fast_exits_with_one() {
        let temp = TempDir::new().unwrap();
        let tool = write_tool(temp.path(), "echo nope >&2\nexit 1");
        let csv = write_csv(temp.path(), &["First,,,,,,,,,", "Second,,,,,,,,,"]);

        importer(temp.path())
            .args(["--fail-fast", "--tool", tool.as_str(), csv.as_str()])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Processing row 3").not())
            .stdout(predicate::str::contains("Issue Creation Summary").not());
    }
}
