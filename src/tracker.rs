//! Creating issues in an external issue tracker.
//!
//! Issue creation is delegated to the tracker's command line tool. The
//! [`traits::IssueTracker`] trait is the seam the importer talks to so the
//! real CLI can be swapped for a dry run, or for a mock in tests.

/// Dry run tracker that only reports the commands it would run.
pub mod dry_run;

/// GitHub CLI (`gh issue create`) implementation.
pub mod gh;

/// Classification of the tool's exit status and output.
pub mod output;

/// Common trait for issue tracker backends.
pub mod traits;

/// Request and result types shared by all trackers.
pub mod types;
