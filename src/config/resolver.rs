//! Configuration resolver using builder pattern.
//!
//! Transforms the raw [`Config`] loaded from `issue-importer.toml` into the
//! configuration handed to the importer by merging CLI overrides and
//! validating the result.
//!
//! ## Resolution Precedence (highest to lowest)
//!
//! 1. CLI overrides
//! 2. Config file
//! 3. Built-in defaults

use derive_builder::Builder;

use crate::{
    cli::CliOverrides,
    error::{ImporterError, Result},
};

use super::Config;

/// Resolves configuration by taking ownership and applying all resolution logic.
#[derive(Builder)]
#[builder(setter(into))]
pub struct ConfigResolver {
    config: Config,
    #[builder(default)]
    overrides: CliOverrides,
}

impl ConfigResolver {
    /// Resolves the configuration and returns the validated Config.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = self.config.clone();

        if let Some(repo) = &self.overrides.repo {
            config.repo = repo.clone();
        }

        if let Some(tool) = &self.overrides.tool {
            config.tool = tool.clone();
        }

        // Switches can only turn behaviour on relative to the file.
        if self.overrides.include_completed {
            config.skip_completed = false;
        }

        if self.overrides.fail_fast {
            config.fail_fast = true;
        }

        config.repo = config.repo.trim().to_string();
        config.tool = config.tool.trim().to_string();

        Self::validate_repo(&config.repo)?;

        if config.tool.is_empty() {
            return Err(ImporterError::invalid_config(
                "tool must name an executable",
            ));
        }

        Ok(config)
    }

    /// Repository identifiers must look like `owner/name`.
    fn validate_repo(repo: &str) -> Result<()> {
        let mut parts = repo.split('/');

        let valid = match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) => {
                !owner.is_empty()
                    && !name.is_empty()
                    && !repo.chars().any(char::is_whitespace)
            }
            _ => false,
        };

        if !valid {
            return Err(ImporterError::invalid_config(format!(
                "repo must be in the form owner/name, got '{repo}'"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
