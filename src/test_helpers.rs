//! Common test helper functions shared across test modules.
//!
//! This module provides reusable fixtures for task rows, configuration and
//! CSV input, reducing duplication across test suites.
use crate::{config::Config, record::TaskRecord};

/// CSV header row with every column the importer reads.
pub const TEST_CSV_HEADER: &str = "Task Title,Task Description,Status,Epic,Priority,Impact,Effort,Notes / Suggested Grouping,GitHub Labels (Suggested),Milestone";

/// Creates a TaskRecord with every field filled in.
///
/// # Example
/// ```ignore
/// let record = TaskRecord {
///     status: "Completed".into(),
///     ..create_test_record()
/// };
/// ```
pub fn create_test_record() -> TaskRecord {
    TaskRecord {
        title: "Login form".into(),
        description: "Add login form".into(),
        status: "Open".into(),
        epic: "Auth".into(),
        priority: "High".into(),
        impact: "Large".into(),
        effort: "M".into(),
        notes: "Ship with signup".into(),
        labels: "frontend, auth".into(),
        milestone: "v1".into(),
    }
}

/// Creates a test Config targeting `test/repo`.
pub fn create_test_config() -> Config {
    Config {
        repo: "test/repo".into(),
        skip_completed: true,
        tool: "gh".into(),
        fail_fast: false,
    }
}

/// Builds CSV text from the standard header and the given data lines.
pub fn create_test_csv(rows: &[&str]) -> String {
    let mut csv = String::from(TEST_CSV_HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}
