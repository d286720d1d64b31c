//! Base branch resolution
//!
//! Picks the remote-tracking branch a feature branch is compared against.
//! Both the `master` and `main` conventions are supported without any
//! configuration: a local `master` ref selects `origin/master`, anything
//! else falls back to `origin/main`.

use tracing::debug;

use crate::core::repository::RepositoryOps;
use crate::error::{PrDraftError, Result};

/// Branch names that are never compared against themselves
pub const BASE_BRANCH_NAMES: [&str; 2] = ["master", "main"];

/// The branch being described and the branch it is compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPair {
    /// Checked-out branch
    pub current: String,
    /// Remote-tracking base, e.g. `origin/master`
    pub base: String,
}

/// Remote-tracking base for the detected naming convention
pub fn choose_base(has_local_master: bool) -> &'static str {
    if has_local_master {
        "origin/master"
    } else {
        "origin/main"
    }
}

/// Determine the current branch and its base.
///
/// Only the local `master` ref is checked. Whether the chosen remote ref
/// exists is discovered later, when it is diffed against.
pub fn resolve_branches<R: RepositoryOps + ?Sized>(repo: &R) -> Result<BranchPair> {
    if !repo.is_valid_repository() {
        return Err(PrDraftError::NotGitRepository);
    }

    let current = repo.current_branch()?;
    if BASE_BRANCH_NAMES.contains(&current.as_str()) {
        return Err(PrDraftError::OnBaseBranch(current));
    }

    let has_local_master = repo.ref_exists("master")?;
    let base = choose_base(has_local_master).to_string();
    debug!(%current, %base, "resolved branches");

    Ok(BranchPair { current, base })
}
