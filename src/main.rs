//! prdraft - PR description generator
//!
//! Run `prdraft generate` on a feature branch to draft its pull request
//! description.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prdraft::cli::commands::{Cli, Commands};
use prdraft::cli::{config, generate, template};
use prdraft::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the generated text
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => generate::handle_generate(args).await,
        Commands::Template(args) => template::handle_template(args.command),
        Commands::Config(args) => config::handle_config(args.command),
    }
}
