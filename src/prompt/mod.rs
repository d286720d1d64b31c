//! Branch metadata extraction and prompt rendering
//!
//! - Ticket key extraction from branch names
//! - Base branch resolution
//! - Diff and commit history collection
//! - Template substitution
//! - The pipeline composing them

pub mod branch;
pub mod history;
pub mod pipeline;
pub mod template;
pub mod ticket;

pub use branch::{choose_base, resolve_branches, BranchPair};
pub use history::{collect_history, HistorySnapshot};
pub use pipeline::{build_prompt, build_prompt_at, prepare_prompt, PreparedPrompt};
pub use template::{render_template, TemplateContext};
pub use ticket::{extract_ticket, TicketId, NO_TICKET};
