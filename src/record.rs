//! Reading task rows from the input CSV file.
//!
//! Columns are looked up by header name. A column that is missing from the
//! file, or a row that is shorter than the header, reads as an empty string
//! instead of failing.
use csv::{ReaderBuilder, StringRecord};
use std::{collections::HashMap, fs::File, io::Read, path::Path};

use crate::error::{ImporterError, Result};

pub const COL_TITLE: &str = "Task Title";
pub const COL_DESCRIPTION: &str = "Task Description";
pub const COL_STATUS: &str = "Status";
pub const COL_EPIC: &str = "Epic";
pub const COL_PRIORITY: &str = "Priority";
pub const COL_IMPACT: &str = "Impact";
pub const COL_EFFORT: &str = "Effort";
pub const COL_NOTES: &str = "Notes / Suggested Grouping";
pub const COL_LABELS: &str = "GitHub Labels (Suggested)";
pub const COL_MILESTONE: &str = "Milestone";

/// Row number of the first data row; the header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// One task row of the input table. All fields are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRecord {
    pub title: String,
    pub description: String,
    pub status: String,
    pub epic: String,
    pub priority: String,
    pub impact: String,
    pub effort: String,
    pub notes: String,
    pub labels: String,
    pub milestone: String,
}

/// Maps header names to column indices.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}').trim().to_string(), i))
            .collect();

        Self { columns }
    }

    /// Trimmed value of `column` in `record`, empty when absent.
    pub fn field(&self, record: &StringRecord, column: &str) -> String {
        self.columns
            .get(column)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }
}

impl TaskRecord {
    pub fn from_record(record: &StringRecord, headers: &HeaderMap) -> Self {
        Self {
            title: headers.field(record, COL_TITLE),
            description: headers.field(record, COL_DESCRIPTION),
            status: headers.field(record, COL_STATUS),
            epic: headers.field(record, COL_EPIC),
            priority: headers.field(record, COL_PRIORITY),
            impact: headers.field(record, COL_IMPACT),
            effort: headers.field(record, COL_EFFORT),
            notes: headers.field(record, COL_NOTES),
            labels: headers.field(record, COL_LABELS),
            milestone: headers.field(record, COL_MILESTONE),
        }
    }
}

/// Streams [`TaskRecord`]s out of a CSV source in file order.
///
/// Each item carries the 1-based row number of the record in the file.
/// Iteration stops after the first read error; that error is fatal to an
/// import run.
pub struct TaskReader<R> {
    reader: csv::Reader<R>,
    headers: HeaderMap,
    buffer: StringRecord,
    next_row: usize,
    failed: bool,
}

impl TaskReader<File> {
    /// Open the CSV file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ImporterError::InputNotFound(path.into()));
        }

        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> TaskReader<R> {
    /// Wrap any reader producing CSV text. The header row is read eagerly.
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader
            .headers()
            .map_err(|e| ImporterError::input_read(1, e))?;
        let headers = HeaderMap::from_headers(headers);

        Ok(Self {
            reader,
            headers,
            buffer: StringRecord::new(),
            next_row: FIRST_DATA_ROW,
            failed: false,
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<R: Read> Iterator for TaskReader<R> {
    type Item = (usize, Result<TaskRecord>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let row = self.next_row;

        match self.reader.read_record(&mut self.buffer) {
            Ok(true) => {
                self.next_row += 1;
                let record = TaskRecord::from_record(&self.buffer, &self.headers);
                Some((row, Ok(record)))
            }
            Ok(false) => None,
            Err(e) => {
                self.failed = true;
                Some((row, Err(ImporterError::input_read(row, e))))
            }
        }
    }
}
