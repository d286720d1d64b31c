//! prdraft - Draft pull request descriptions from branch history
//!
//! The library resolves the base branch of the checked-out branch, collects
//! the merge-base diff and commit list, extracts a ticket key from the
//! branch name, and renders everything into a user template. The rendered
//! prompt is then sent to a chat completion API by the CLI.

pub mod ai;
pub mod cli;
pub mod core;
pub mod error;
pub mod prompt;

pub use error::{PrDraftError, Result};
pub use prompt::{build_prompt, build_prompt_at};
