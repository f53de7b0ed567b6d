//! Drives an import run: reads rows in file order, formats each one and
//! hands the resulting request to the issue tracker.
//!
//! Rows are processed strictly one after another. Progress for every row
//! and a final summary are written to the supplied output. A skipped row
//! or an issue the tracker fails to create is counted and the run goes on;
//! only an error reading the input (or a failure under `fail_fast`) ends
//! the run early, in which case no summary is written.
use log::*;
use std::{fmt, io::Read, io::Write, path::Path};

use crate::{
    config::Config,
    error::{ImporterError, Result},
    formatter::{
        FormatPolicy, RowDisposition, SkipReason, TITLE_PREVIEW_LEN,
        format_record, truncate_title,
    },
    record::{COL_TITLE, TaskReader, TaskRecord},
    tracker::{traits::IssueTracker, types::SubmissionResult},
};

const RULE: &str = "============================================";

/// Counters for the rows of one run. Each row lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Total number of rows processed.
    pub fn total(&self) -> usize {
        self.created + self.skipped + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Issue Creation Summary:")?;
        writeln!(f, "  Successfully Created: {}", self.created)?;
        writeln!(f, "  Skipped (Status or Malformed Row): {}", self.skipped)?;
        writeln!(f, "  Failed: {}", self.failed)?;
        write!(f, "{RULE}")
    }
}

pub struct Importer {
    config: Config,
    tracker: Box<dyn IssueTracker>,
}

impl Importer {
    pub fn new(config: Config, tracker: Box<dyn IssueTracker>) -> Self {
        Self { config, tracker }
    }

    /// Import every row of the CSV file at `path`.
    ///
    /// Fails without writing anything if the file does not exist.
    pub fn run_file(
        &self,
        path: &Path,
        out: &mut dyn Write,
    ) -> Result<RunSummary> {
        let reader = TaskReader::from_path(path)?;

        writeln!(
            out,
            "Processing issues for repository: {}",
            self.config.repo
        )?;
        writeln!(out, "Reading from CSV file: {}", path.display())?;
        writeln!(out, "{RULE}")?;

        self.run(reader, out)
    }

    /// Import every row produced by `reader`, then write the summary.
    pub fn run<R: Read>(
        &self,
        reader: TaskReader<R>,
        out: &mut dyn Write,
    ) -> Result<RunSummary> {
        let policy = FormatPolicy {
            skip_completed: self.config.skip_completed,
        };

        if !reader.headers().contains(COL_TITLE) {
            warn!("column '{COL_TITLE}' not found: every row will be skipped");
        }

        let mut summary = RunSummary::default();

        for (row, record) in reader {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    writeln!(out, "\nAn error occurred during processing: {err}")?;
                    writeln!(out, "Processing stopped at row {row}.")?;
                    return Err(err);
                }
            };

            self.process_row(row, &record, &policy, &mut summary, out)?;
        }

        debug!("processed {} rows", summary.total());

        writeln!(out, "\n{summary}")?;

        Ok(summary)
    }

    fn process_row(
        &self,
        row: usize,
        record: &TaskRecord,
        policy: &FormatPolicy,
        summary: &mut RunSummary,
        out: &mut dyn Write,
    ) -> Result<()> {
        let preview = truncate_title(record.title.trim(), TITLE_PREVIEW_LEN);

        let request = match format_record(record, row, policy) {
            RowDisposition::Skip(SkipReason::MissingTitle) => {
                writeln!(out, "\nSkipping row {row} (Malformed Row - Missing Title)")?;
                summary.skipped += 1;
                return Ok(());
            }
            RowDisposition::Skip(SkipReason::StatusCompleted) => {
                writeln!(out, "\nProcessing row {row}: '{preview}...'")?;
                writeln!(out, "Skipping row {row} (Status: Completed): '{preview}...'")?;
                summary.skipped += 1;
                return Ok(());
            }
            RowDisposition::Submit(request) => request,
        };

        writeln!(out, "\nProcessing row {row}: '{preview}...'")?;

        match self.tracker.create_issue(&request) {
            SubmissionResult::Created { url } => {
                writeln!(out, " -> SUCCESS: Created Issue '{}' {url}", request.title)?;
                summary.created += 1;
            }
            SubmissionResult::Failed { exit_code, message } => {
                match exit_code {
                    Some(code) => writeln!(
                        out,
                        " -> FAILED: Command returned non-zero exit status {code}."
                    )?,
                    None => writeln!(out, " -> FAILED: Command could not be completed.")?,
                }
                if !message.is_empty() {
                    writeln!(out, " -> Error Output: {message}")?;
                }
                writeln!(out, "^^^ Failure occurred for row {row} ('{preview}...')")?;
                summary.failed += 1;

                if self.config.fail_fast {
                    warn!("fail_fast is set: stopping at row {row}");
                    return Err(ImporterError::submission_failed(row, message));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "importer_tests.rs"]
mod importer_tests;
