//! CLI command definitions using clap
//!
//! Defines the command structure for the `prdraft` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// prdraft - Draft pull request descriptions from branch history
///
/// Compares the current branch against origin/master or origin/main,
/// fills a template with the branch, ticket, commits and diff, and asks an
/// LLM to write the description.
#[derive(Parser, Debug)]
#[command(name = "prdraft", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a PR description for the current branch
    Generate(GenerateArgs),

    /// Manage the PR template
    Template(TemplateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Generate Command
// ─────────────────────────────────────────────────────────────────────────────

/// Generate command arguments
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Repository directory (defaults to the current directory)
    #[arg(long, short = 'C', default_value = ".")]
    pub path: PathBuf,

    /// Read the template from this file instead of the saved template
    #[arg(long, short = 't')]
    pub template_file: Option<PathBuf>,

    /// Print the rendered prompt without calling the completion API
    #[arg(long)]
    pub prompt_only: bool,

    /// Write the result to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Template Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Template commands
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Print the saved template
    Show,

    /// Edit the saved template in $VISUAL or $EDITOR
    Edit,

    /// Save the contents of a file as the template
    Set {
        /// Template file
        file: PathBuf,
    },

    /// Remove the saved template
    Clear,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Remove a configuration value
    Remove {
        /// Configuration key
        key: ConfigKey,
    },

    /// Print the configuration file location
    Path,
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Completion API key
    #[value(name = "api-key")]
    ApiKey,

    /// Completion model
    #[value(name = "model")]
    Model,

    /// Sampling temperature
    #[value(name = "temperature")]
    Temperature,

    /// Completion API base URL
    #[value(name = "api-base")]
    ApiBase,
}
