//! Placeholder substitution for PR templates
//!
//! A template may reference five values as `{currentBranch}`,
//! `{targetBranch}`, `{jiraTicket}`, `{commitMessages}` and `{diff}`.
//! Only the first occurrence of each token is replaced; repeated tokens and
//! unknown `{names}` stay in the output as literal text.

use crate::error::{PrDraftError, Result};

/// Values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub current_branch: String,
    pub target_branch: String,
    pub jira_ticket: String,
    pub commit_messages: String,
    pub diff: String,
}

impl TemplateContext {
    /// Placeholder names paired with their values
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("currentBranch", self.current_branch.as_str()),
            ("targetBranch", self.target_branch.as_str()),
            ("jiraTicket", self.jira_ticket.as_str()),
            ("commitMessages", self.commit_messages.as_str()),
            ("diff", self.diff.as_str()),
        ]
    }
}

/// Substitute `context` into `template`.
///
/// Token positions are located in the original template, so a value that
/// itself contains `{diff}` or similar is inserted as-is.
pub fn render_template(template: &str, context: &TemplateContext) -> Result<String> {
    if template.trim().is_empty() {
        return Err(PrDraftError::MissingTemplate);
    }

    let mut spans: Vec<(usize, usize, &str)> = context
        .entries()
        .into_iter()
        .filter_map(|(key, value)| {
            let token = format!("{{{}}}", key);
            template
                .find(&token)
                .map(|start| (start, start + token.len(), value))
        })
        .collect();
    spans.sort_by_key(|(start, _, _)| *start);

    let mut rendered = String::with_capacity(template.len());
    let mut cursor = 0;
    for (start, end, value) in spans {
        rendered.push_str(&template[cursor..start]);
        rendered.push_str(value);
        cursor = end;
    }
    rendered.push_str(&template[cursor..]);

    Ok(rendered)
}
