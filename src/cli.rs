//! CLI argument parsing and configuration overrides.
use clap::Parser;
use std::path::PathBuf;

use crate::error::{ImporterError, Result};

/// Usage line printed when no CSV file is given.
pub const USAGE: &str = "usage: issue-importer <path_to_csv_file>";

/// Create GitHub issues from the rows of a task CSV file.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file with task rows.
    pub csv_file: Option<PathBuf>,

    #[arg(long)]
    /// Target repository as owner/name. Overrides the config file.
    pub repo: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Create issues for rows whose status is "Completed" too.
    pub include_completed: bool,

    #[arg(long)]
    /// Issue tracker CLI executable. Defaults to "gh".
    pub tool: Option<String>,

    #[arg(long)]
    /// Path to a configuration file (default: ./issue-importer.toml).
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Print the commands that would run without creating issues.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Stop the whole run at the first issue that fails to be created.
    pub fail_fast: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

/// Configuration values supplied on the command line.
///
/// `None` (or `false` for switches) means "not given": the value from the
/// configuration file or the built-in default is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub repo: Option<String>,
    pub tool: Option<String>,
    pub include_completed: bool,
    pub fail_fast: bool,
}

impl Args {
    /// Path of the CSV input, failing when the argument was omitted.
    pub fn csv_path(&self) -> Result<PathBuf> {
        self.csv_file
            .clone()
            .ok_or_else(|| ImporterError::invalid_args(USAGE))
    }

    /// Collect config overrides from the parsed arguments.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            repo: self.repo.clone(),
            tool: self.tool.clone(),
            include_completed: self.include_completed,
            fail_fast: self.fail_fast,
        }
    }
}
