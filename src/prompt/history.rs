//! Branch history collection
//!
//! The diff uses the three-dot range (`base...current`, i.e. against the
//! merge base) while the commit list uses the two-dot range
//! (`base..current`, commits reachable from current only).

use tracing::debug;

use crate::core::repository::RepositoryOps;
use crate::error::{PrDraftError, Result};
use crate::prompt::branch::BranchPair;

/// What a branch changed since it diverged from its base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    /// Merge-base diff, never empty
    pub diff_text: String,
    /// Commit summaries, newest first
    pub commit_messages: Vec<String>,
}

impl HistorySnapshot {
    /// Commit messages as one newline-separated block
    pub fn commit_block(&self) -> String {
        self.commit_messages.join("\n")
    }
}

/// Collect the diff and commit messages between `pair.base` and `pair.current`
pub fn collect_history<R: RepositoryOps + ?Sized>(
    repo: &R,
    pair: &BranchPair,
) -> Result<HistorySnapshot> {
    let diff_text = repo.diff(&format!("{}...{}", pair.base, pair.current))?;
    if diff_text.is_empty() {
        return Err(PrDraftError::NoDifferences {
            base: pair.base.clone(),
            current: pair.current.clone(),
        });
    }

    let commit_messages: Vec<String> = repo
        .log(&format!("{}..{}", pair.base, pair.current))?
        .into_iter()
        .map(|c| c.message)
        .collect();

    debug!(
        diff_bytes = diff_text.len(),
        commits = commit_messages.len(),
        "collected history"
    );

    Ok(HistorySnapshot {
        diff_text,
        commit_messages,
    })
}
