//! Ticket identifier extraction from branch names

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Text substituted when a branch name carries no ticket key
pub const NO_TICKET: &str = "No Jira ticket found";

// Uppercase project keys and ASCII digits only: `abc-123` does not match.
static TICKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]+-[0-9]+").expect("ticket pattern is valid"));

/// Ticket key found in a branch name, e.g. `ABC-123`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketId {
    Found(String),
    NotFound,
}

impl TicketId {
    pub fn as_str(&self) -> &str {
        match self {
            TicketId::Found(key) => key,
            TicketId::NotFound => NO_TICKET,
        }
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the first `LETTERS-DIGITS` key in `branch_name`, verbatim
pub fn extract_ticket(branch_name: &str) -> TicketId {
    TICKET_PATTERN
        .find(branch_name)
        .map(|m| TicketId::Found(m.as_str().to_string()))
        .unwrap_or(TicketId::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_feature_branch() {
        assert_eq!(
            extract_ticket("feature/ABC-123-foo"),
            TicketId::Found("ABC-123".to_string())
        );
    }

    #[test]
    fn test_no_ticket_returns_sentinel() {
        let ticket = extract_ticket("feature/login-fix");
        assert_eq!(ticket, TicketId::NotFound);
        assert_eq!(ticket.to_string(), "No Jira ticket found");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_ticket("OPS-1-and-DEV-22").as_str(), "OPS-1");
    }

    #[test]
    fn test_lowercase_prefix_does_not_match() {
        assert_eq!(extract_ticket("abc-123-foo"), TicketId::NotFound);
    }

    #[test]
    fn test_uppercase_tail_of_mixed_case_word() {
        // Only the uppercase run adjacent to the dash is captured
        assert_eq!(extract_ticket("fixBUG-9").as_str(), "BUG-9");
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        assert_eq!(extract_ticket("ABC-\u{0661}\u{0662}\u{0663}"), TicketId::NotFound);
        assert_eq!(extract_ticket("ABC-12\u{0663}").as_str(), "ABC-12");
    }

    #[test]
    fn test_empty_branch_name() {
        assert_eq!(extract_ticket(""), TicketId::NotFound);
    }
}
