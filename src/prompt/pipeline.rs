//! Prompt assembly pipeline
//!
//! resolve branches → collect history → extract ticket → render template.
//! The first failing stage ends the run and its error is returned as-is.

use std::path::Path;

use tracing::debug;

use crate::core::git::GitRepository;
use crate::core::repository::RepositoryOps;
use crate::error::Result;
use crate::prompt::branch::{resolve_branches, BranchPair};
use crate::prompt::history::collect_history;
use crate::prompt::template::{render_template, TemplateContext};
use crate::prompt::ticket::{extract_ticket, TicketId};

/// A rendered prompt along with what went into it
#[derive(Debug, Clone)]
pub struct PreparedPrompt {
    pub branches: BranchPair,
    pub ticket: TicketId,
    pub commit_count: usize,
    pub prompt: String,
}

/// Run every stage against `repo` and keep the intermediate values
pub fn prepare_prompt<R: RepositoryOps + ?Sized>(
    repo: &R,
    template: &str,
) -> Result<PreparedPrompt> {
    let branches = resolve_branches(repo)?;
    let history = collect_history(repo, &branches)?;
    let ticket = extract_ticket(&branches.current);
    debug!(%ticket, "extracted ticket");

    let context = TemplateContext {
        current_branch: branches.current.clone(),
        target_branch: branches.base.clone(),
        jira_ticket: ticket.to_string(),
        commit_messages: history.commit_block(),
        diff: history.diff_text,
    };
    let prompt = render_template(template, &context)?;

    Ok(PreparedPrompt {
        branches,
        ticket,
        commit_count: history.commit_messages.len(),
        prompt,
    })
}

/// Build the prompt text for `repo`
pub fn build_prompt<R: RepositoryOps + ?Sized>(repo: &R, template: &str) -> Result<String> {
    prepare_prompt(repo, template).map(|prepared| prepared.prompt)
}

/// Open the repository containing `path` and build a prompt from it
pub fn build_prompt_at<P: AsRef<Path>>(path: P, template: &str) -> Result<PreparedPrompt> {
    let repo = GitRepository::discover(path)?;
    prepare_prompt(&repo, template)
}
