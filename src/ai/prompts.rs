//! Fixed prompt text for PR description generation

/// System instruction sent with every completion request
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant for generating pull request comments. \
Follow the template structure exactly as provided. \
If a Jira ticket is provided, include relevant information from the ticket number in the description. \
Only output the markdown content without any additional text or formatting.";

/// Initial editor content when no template has been saved yet.
///
/// Never substituted implicitly: generation without a saved template fails.
pub const STARTER_TEMPLATE: &str = r#"## Ticket
{jiraTicket}

## Summary
Describe the changes on {currentBranch} compared to {targetBranch}.

## Commits
{commitMessages}

## Diff
{diff}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::template::{render_template, TemplateContext};

    #[test]
    fn test_starter_template_uses_every_placeholder() {
        let context = TemplateContext {
            current_branch: "a".to_string(),
            target_branch: "b".to_string(),
            jira_ticket: "c".to_string(),
            commit_messages: "d".to_string(),
            diff: "e".to_string(),
        };
        let rendered = render_template(STARTER_TEMPLATE, &context).unwrap();
        assert!(!rendered.contains('{'));
    }
}
