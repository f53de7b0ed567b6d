//! Configuration loading and parsing for `issue-importer.toml` files.
//!
//! Every setting has a built-in default so the file is optional. Values
//! given on the command line are layered on top by [`resolver`].
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{ImporterError, Result};

pub mod resolver;

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "issue-importer.toml";
/// Repository issues are created in when nothing else is configured.
pub const DEFAULT_REPO: &str = "CoriyonArrington/nextjs-with-supabase";
/// Issue tracker CLI invoked for each row.
pub const DEFAULT_TOOL: &str = "gh";

/// Root configuration structure for `issue-importer.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Target repository as `owner/name`.
    pub repo: String,
    /// Skip rows whose status is "Completed" (default: true).
    pub skip_completed: bool,
    /// Issue tracker CLI executable (default: "gh").
    pub tool: String,
    /// Abort the run at the first failed issue (default: false).
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.into(),
            skip_completed: true,
            tool: DEFAULT_TOOL.into(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in
    /// the working directory when no path is given.
    ///
    /// An explicitly requested file must exist. The default file is
    /// optional and built-in defaults are used when it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ImporterError::ConfigNotFound(path.into()));
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    info!("configuration file not found: using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
