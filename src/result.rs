//! Result type for the `issue-importer` binary.
//!
//! Library code returns [`crate::error::Result`] with a typed
//! [`crate::error::ImporterError`]. The binary converts those into a
//! `color-eyre` report at the top level so fatal errors are rendered with
//! their context chain before the process exits with status 1.
//!
//! ```rust,ignore
//! use issue_importer::result::Result;
//! use color_eyre::eyre::WrapErr;
//!
//! fn run() -> Result<()> {
//!     let config = Config::load(None).wrap_err("failed to load configuration")?;
//!     Ok(())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the binary entry point.
pub type Result<T> = EyreResult<T>;
