//! Types exchanged with issue tracker backends.

/// An issue ready to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRequest {
    /// Issue title, never empty.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Labels in input order, duplicates kept.
    pub labels: Vec<String>,
    /// Milestone to assign, if any.
    pub milestone: Option<String>,
}

/// Outcome of one attempt to create an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The issue was created. `url` is empty when the tool printed nothing.
    Created { url: String },
    /// The issue was not created.
    Failed {
        /// Exit code of the tool, `None` if it never ran or was killed.
        exit_code: Option<i32>,
        /// Diagnostic text reported by the tool, possibly empty.
        message: String,
    },
}

impl SubmissionResult {
    pub fn created(url: impl Into<String>) -> Self {
        Self::Created { url: url.into() }
    }

    pub fn failed(exit_code: Option<i32>, message: impl Into<String>) -> Self {
        Self::Failed {
            exit_code,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// URL of the created issue, only present on success.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created { url } => Some(url),
            Self::Failed { .. } => None,
        }
    }

    /// Diagnostic text, only present on failure.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Created { .. } => None,
            Self::Failed { message, .. } => Some(message),
        }
    }
}
