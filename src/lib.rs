pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod importer;
pub mod record;
pub mod result;
pub mod tracker;

pub use error::{ImporterError, Result};
pub use importer::{Importer, RunSummary};

#[cfg(test)]
pub mod test_helpers;
