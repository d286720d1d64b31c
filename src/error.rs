//! Custom error types for prdraft
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the prdraft application
#[derive(Error, Debug)]
pub enum PrDraftError {
    /// Not running in a git repository
    #[error("This directory is not a git repository.\n\n  → Run prdraft inside a git working tree, or pass --path.")]
    NotGitRepository,

    /// The checked-out branch is the base branch itself
    #[error("Currently on the '{0}' branch.\n\n  → Switch to your feature branch before generating a PR description.")]
    OnBaseBranch(String),

    /// Merge-base diff between base and current branch is empty
    #[error("No differences found between '{base}' and '{current}'.\n\n  → Commit your changes, or run 'git fetch' if '{base}' is out of date.")]
    NoDifferences { base: String, current: String },

    /// API key not configured
    #[error("OpenAI API key is not set.\n\n  → Run 'prdraft config set api-key YOUR_KEY', or export OPENAI_API_KEY.")]
    MissingApiKey,

    /// PR template not configured or empty
    #[error("PR template is not set.\n\n  → Run 'prdraft template edit' or 'prdraft template set FILE', or pass --template-file.")]
    MissingTemplate,

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// Credential storage error
    #[error("Cannot access secure storage: {0}\n\n  → On macOS: Make sure Keychain Access is available.\n  → On Linux: Ensure a secret service (like gnome-keyring) is running.")]
    Credential(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check your internet connection.")]
    Network(#[from] reqwest::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Completion API error
    #[error("AI generation failed: {0}\n\n  → Check your API key with 'prdraft config get api-key'.")]
    CompletionApi(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),

    /// Blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),

    /// Operation cancelled by user
    #[error("Operation cancelled.")]
    Cancelled,
}

impl From<keyring::Error> for PrDraftError {
    fn from(err: keyring::Error) -> Self {
        PrDraftError::Credential(err.to_string())
    }
}

impl From<toml::de::Error> for PrDraftError {
    fn from(err: toml::de::Error) -> Self {
        PrDraftError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PrDraftError {
    fn from(err: toml::ser::Error) -> Self {
        PrDraftError::Toml(err.to_string())
    }
}

/// Result type alias using PrDraftError
pub type Result<T> = std::result::Result<T, PrDraftError>;
