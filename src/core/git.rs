//! Local git repository operations
//!
//! This module provides a read-only wrapper around git2 for the operations
//! the prompt pipeline needs:
//! - Repository discovery and validation
//! - Current branch and ref lookup
//! - Range diffs (two-dot and three-dot)
//! - Commit history between two refs

use std::path::Path;

use git2::{DiffOptions, ErrorCode, Oid, Repository, RevparseMode, Sort};
use tracing::{debug, warn};

use crate::core::repository::{CommitInfo, RepositoryOps};
use crate::error::{PrDraftError, Result};

/// Wrapper for local git repository operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the git repository in the current directory
    pub fn open_current_dir() -> Result<Self> {
        Self::discover(".")
    }

    /// Discover a git repository from the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| PrDraftError::NotGitRepository)?;
        Ok(Self { repo })
    }

    /// Wrap an already opened repository
    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Render a diff as patch text
    fn patch_text(diff: &git2::Diff<'_>) -> Result<String> {
        let mut diff_text = String::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            // Content lines carry their origin marker separately
            if matches!(line.origin(), '+' | '-' | ' ') {
                diff_text.push(line.origin());
            }
            diff_text.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;
        Ok(diff_text)
    }

    fn commit_id(object: Option<&git2::Object<'_>>, range: &str) -> Result<Oid> {
        let object = object.ok_or_else(|| {
            PrDraftError::InvalidInput(format!("Incomplete revision range '{}'", range))
        })?;
        Ok(object.peel_to_commit()?.id())
    }
}

impl RepositoryOps for GitRepository {
    fn is_valid_repository(&self) -> bool {
        !self.repo.is_bare()
    }

    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if head.is_branch() {
                    Ok(head.shorthand().unwrap_or("HEAD").to_string())
                } else {
                    warn!("HEAD is detached; comparing from HEAD");
                    Ok("HEAD".to_string())
                }
            }
            Err(e) => {
                // Unborn HEAD (no commits yet)
                if e.code() == ErrorCode::UnbornBranch {
                    let target = self
                        .repo
                        .find_reference("HEAD")
                        .ok()
                        .and_then(|r| r.symbolic_target().map(str::to_string));
                    if let Some(branch) = target
                        .as_deref()
                        .and_then(|t| t.strip_prefix("refs/heads/"))
                    {
                        return Ok(branch.to_string());
                    }
                    if let Ok(config) = self.repo.config() {
                        if let Ok(branch) = config.get_string("init.defaultBranch") {
                            return Ok(branch);
                        }
                    }
                    Ok("master".to_string())
                } else {
                    Err(e.into())
                }
            }
        }
    }

    fn ref_exists(&self, name: &str) -> Result<bool> {
        match self.repo.revparse_single(name) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                debug!(name, "ref does not resolve");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn diff(&self, range: &str) -> Result<String> {
        debug!(range, "computing diff");
        let spec = self.repo.revparse(range)?;
        let mut opts = DiffOptions::new();

        if spec.mode().contains(RevparseMode::SINGLE) {
            let id = Self::commit_id(spec.from(), range)?;
            let tree = self.repo.find_commit(id)?.tree()?;
            let diff = self
                .repo
                .diff_tree_to_workdir_with_index(Some(&tree), Some(&mut opts))?;
            return Self::patch_text(&diff);
        }

        let from = Self::commit_id(spec.from(), range)?;
        let to = Self::commit_id(spec.to(), range)?;

        // a...b compares b against the point where it diverged from a
        let old = if spec.mode().contains(RevparseMode::MERGE_BASE) {
            self.repo.merge_base(from, to)?
        } else {
            from
        };

        let old_tree = self.repo.find_commit(old)?.tree()?;
        let new_tree = self.repo.find_commit(to)?.tree()?;
        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))?;

        Self::patch_text(&diff)
    }

    fn log(&self, range: &str) -> Result<Vec<CommitInfo>> {
        debug!(range, "walking commits");
        let spec = self.repo.revparse(range)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        if spec.mode().contains(RevparseMode::SINGLE) {
            revwalk.push(Self::commit_id(spec.from(), range)?)?;
        } else {
            let from = Self::commit_id(spec.from(), range)?;
            let to = Self::commit_id(spec.to(), range)?;
            revwalk.push(to)?;
            if spec.mode().contains(RevparseMode::MERGE_BASE) {
                // Symmetric difference: both sides, minus shared history
                revwalk.push(from)?;
                revwalk.hide(self.repo.merge_base(from, to)?)?;
            } else {
                // Equivalent to git rev-list from..to
                revwalk.hide(from)?;
            }
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            // First paragraph folded onto one line, as `git log --format=%s`
            let summary = commit
                .summary_bytes()
                .map(|s| String::from_utf8_lossy(s).trim().to_string())
                .unwrap_or_default();
            commits.push(CommitInfo::new(summary));
        }

        Ok(commits)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Scratch repositories for tests

    use std::fs;

    use git2::build::CheckoutBuilder;
    use git2::{Oid, Repository, RepositoryInitOptions, Signature};
    use tempfile::TempDir;

    pub struct TestRepo {
        pub dir: TempDir,
        pub repo: Repository,
    }

    impl TestRepo {
        /// New non-bare repository with `master` as the initial branch
        pub fn new() -> Self {
            Self::with_initial_branch("master")
        }

        pub fn with_initial_branch(branch: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let mut opts = RepositoryInitOptions::new();
            opts.initial_head(branch);
            let repo = Repository::init_opts(dir.path(), &opts).unwrap();
            Self { dir, repo }
        }

        /// Write a file and commit it on the current branch
        pub fn commit_file(&self, name: &str, content: impl AsRef<[u8]>, message: &str) -> Oid {
            fs::write(self.dir.path().join(name), content).unwrap();

            let mut index = self.repo.index().unwrap();
            index.add_path(std::path::Path::new(name)).unwrap();
            index.write().unwrap();
            let tree_id = index.write_tree().unwrap();
            let tree = self.repo.find_tree(tree_id).unwrap();

            let sig = Signature::now("Test", "test@example.com").unwrap();
            let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
            let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
                .unwrap()
        }

        /// Create `name` from HEAD and check it out
        pub fn branch(&self, name: &str) {
            let head = self.repo.head().unwrap().peel_to_commit().unwrap();
            self.repo.branch(name, &head, false).unwrap();
            self.checkout(name);
        }

        pub fn checkout(&self, name: &str) {
            self.repo.set_head(&format!("refs/heads/{}", name)).unwrap();
            self.repo
                .checkout_head(Some(CheckoutBuilder::new().force()))
                .unwrap();
        }

        /// Point `refs/remotes/origin/<name>` at `oid`
        pub fn set_remote_branch(&self, name: &str, oid: Oid) {
            self.repo
                .reference(
                    &format!("refs/remotes/origin/{}", name),
                    oid,
                    true,
                    "test remote ref",
                )
                .unwrap();
        }

        pub fn open(&self) -> super::GitRepository {
            super::GitRepository::discover(self.dir.path()).unwrap()
        }
    }
}
