//! Repository capability used by the prompt pipeline
//!
//! The pipeline only ever reads from a repository. Everything it needs is
//! behind [`RepositoryOps`] so the branch and history logic can be tested
//! against a double instead of a real working tree.

use crate::error::Result;

/// A single entry produced by [`RepositoryOps::log`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Commit message summary (first line)
    pub message: String,
}

impl CommitInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read-only view of a git working directory
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryOps {
    /// Whether the handle points at a usable working tree
    fn is_valid_repository(&self) -> bool;

    /// Name of the checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Whether `name` resolves to an object.
    ///
    /// Returns `Ok(false)` when the name does not resolve; any other failure
    /// is an error.
    fn ref_exists(&self, name: &str) -> Result<bool>;

    /// Patch text for a revision range (`a...b`, `a..b`, or a single rev)
    fn diff(&self, range: &str) -> Result<String>;

    /// Commits in a revision range, newest first
    fn log(&self, range: &str) -> Result<Vec<CommitInfo>>;
}
